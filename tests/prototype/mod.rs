pub mod tests_prototype_marker;
