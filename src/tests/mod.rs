mod member_registry_tests;
