mod execute_tests;
mod generate_tests;
mod schema_tests;
