pub mod tests_csharp_elements;
pub mod tests_csharp_prototypes;
pub mod tests_highlight;
pub mod tests_tokens;
pub mod tests_verilog;
