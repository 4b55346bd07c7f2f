mod command_parse_tests;
mod profile_tests;
