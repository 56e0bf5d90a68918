mod find_test;
mod moments_test;
