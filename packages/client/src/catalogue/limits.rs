//! Byte-length ceilings, measured on the UTF-8 encoding of the value

pub const DR: usize = 2048;
pub const CN: usize = 100;
pub const CS: usize = 100;
pub const CM: usize = 50;
pub const CK: usize = 500;
pub const CC: usize = 500;
pub const CI: usize = 100;

pub const SR: usize = 20;
pub const VP: usize = 20;
pub const DE: usize = 20;
pub const SD: usize = 20;
pub const UL: usize = 20;
pub const FL: usize = 20;

pub const DL: usize = 2048;
pub const DH: usize = 100;
pub const DP: usize = 2048;
pub const DT: usize = 1500;
pub const CD: usize = 2048;

pub const AN: usize = 100;
pub const AID: usize = 150;
pub const AV: usize = 100;
pub const AIID: usize = 150;

pub const EC: usize = 150;
pub const EA: usize = 500;
pub const EL: usize = 500;

pub const TI: usize = 500;
pub const TA: usize = 500;
pub const IN: usize = 500;
pub const IC: usize = 500;
pub const IV: usize = 500;
pub const CU: usize = 500;

/// Product id, name, brand, category, variant and coupon code
pub const PRODUCT_TEXT: usize = 500;

pub const SN: usize = 50;
pub const SA: usize = 50;
pub const ST: usize = 2048;

pub const UTC: usize = 150;
pub const UTV: usize = 500;
pub const UTL: usize = 500;

pub const EXD: usize = 150;

pub const XID: usize = 40;
