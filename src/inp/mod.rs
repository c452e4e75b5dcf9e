pub mod arg_parse;
