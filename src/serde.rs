pub mod double_option;
