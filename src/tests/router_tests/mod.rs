mod lead_tests;
mod pages_tests;
