pub mod general_utils;
