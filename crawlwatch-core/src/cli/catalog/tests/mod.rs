mod catalog_cmd_tests;
