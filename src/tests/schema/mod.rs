mod grammar_tests;
