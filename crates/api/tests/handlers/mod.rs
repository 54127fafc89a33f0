mod middleware_test;
mod slots_test;
