


pub mod prop_tests;
