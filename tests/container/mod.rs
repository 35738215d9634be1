mod contact_table_tests;
mod hash_functions_tests;
