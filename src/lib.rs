#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use jq_reflect as reflect;
pub use jq_utils as utils;
