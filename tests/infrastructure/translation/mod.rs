mod google_translator_test;
