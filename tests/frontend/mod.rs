mod lexer_tests;
mod parser_tests;
mod type_checker_tests;
