mod line_tests;
