mod type_mapper_tests;
