//! Protocol parameter keys
//!
//! Fixed keys are plain constants. Templated keys carry one `{}` placeholder
//! per positional index and are expanded with [`format_key`](super::format_key).

// General
pub const V: &str = "v";
pub const TID: &str = "tid";
pub const AIP: &str = "aip";
pub const DS: &str = "ds";
pub const QT: &str = "qt";
pub const Z: &str = "z";

// User
pub const CID: &str = "cid";
pub const UID: &str = "uid";

// Session
pub const SC: &str = "sc";
pub const UIP: &str = "uip";
pub const UA: &str = "ua";
pub const GEOID: &str = "geoid";

// Traffic sources
pub const DR: &str = "dr";
pub const CN: &str = "cn";
pub const CS: &str = "cs";
pub const CM: &str = "cm";
pub const CK: &str = "ck";
pub const CC: &str = "cc";
pub const CI: &str = "ci";
pub const GCLID: &str = "gclid";
pub const DCLID: &str = "dclid";

// System info
pub const SR: &str = "sr";
pub const VP: &str = "vp";
pub const DE: &str = "de";
pub const SD: &str = "sd";
pub const UL: &str = "ul";
pub const JE: &str = "je";
pub const FL: &str = "fl";

// Hit
pub const T: &str = "t";
pub const NI: &str = "ni";

// Content information
pub const DL: &str = "dl";
pub const DH: &str = "dh";
pub const DP: &str = "dp";
pub const DT: &str = "dt";
pub const CD: &str = "cd";
pub const LINKID: &str = "linkid";

// App tracking
pub const AN: &str = "an";
pub const AID: &str = "aid";
pub const AV: &str = "av";
pub const AIID: &str = "aiid";

// Event tracking
pub const EC: &str = "ec";
pub const EA: &str = "ea";
pub const EL: &str = "el";
pub const EV: &str = "ev";

// E-commerce
pub const TI: &str = "ti";
pub const TA: &str = "ta";
pub const TR: &str = "tr";
pub const TS: &str = "ts";
pub const TT: &str = "tt";
pub const IN: &str = "in";
pub const IP: &str = "ip";
pub const IQ: &str = "iq";
pub const IC: &str = "ic";
pub const IV: &str = "iv";
pub const CU: &str = "cu";

// Enhanced e-commerce: products
pub const PR_N_ID: &str = "pr{}id";
pub const PR_N_NM: &str = "pr{}nm";
pub const PR_N_BR: &str = "pr{}br";
pub const PR_N_CA: &str = "pr{}ca";
pub const PR_N_VA: &str = "pr{}va";
pub const PR_N_PR: &str = "pr{}pr";
pub const PR_N_QT: &str = "pr{}qt";
pub const PR_N_CC: &str = "pr{}cc";
pub const PR_N_PS: &str = "pr{}ps";
pub const PR_X_CD_Y: &str = "pr{}cd{}";
pub const PR_X_CM_Y: &str = "pr{}cm{}";

// Enhanced e-commerce: actions and checkout
pub const PA: &str = "pa";
pub const TCC: &str = "tcc";
pub const PAL: &str = "pal";
pub const COS: &str = "cos";
pub const COL: &str = "col";

// Enhanced e-commerce: impressions
pub const IL_X_NM: &str = "il{}nm";
pub const IL_X_PI_Y_ID: &str = "il{}pi{}id";
pub const IL_X_PI_Y_NM: &str = "il{}pi{}nm";
pub const IL_X_PI_Y_BR: &str = "il{}pi{}br";
pub const IL_X_PI_Y_CA: &str = "il{}pi{}ca";
pub const IL_X_PI_Y_VA: &str = "il{}pi{}va";
pub const IL_X_PI_Y_PS: &str = "il{}pi{}ps";
pub const IL_X_PI_Y_PR: &str = "il{}pi{}pr";
pub const IL_X_PI_Y_CD_Z: &str = "il{}pi{}cd{}";
pub const IL_X_PI_Y_CM_Z: &str = "il{}pi{}cm{}";

// Enhanced e-commerce: promotions
pub const PROMO_N_ID: &str = "promo{}id";
pub const PROMO_N_NM: &str = "promo{}nm";
pub const PROMO_N_CR: &str = "promo{}cr";
pub const PROMO_N_PS: &str = "promo{}ps";
pub const PROMOA: &str = "promoa";

// Social interactions
pub const SN: &str = "sn";
pub const SA: &str = "sa";
pub const ST: &str = "st";

// Timing
pub const UTC: &str = "utc";
pub const UTV: &str = "utv";
pub const UTT: &str = "utt";
pub const UTL: &str = "utl";
pub const PLT: &str = "plt";
pub const DNS: &str = "dns";
pub const PDT: &str = "pdt";
pub const RRT: &str = "rrt";
pub const TCP: &str = "tcp";
pub const SRT: &str = "srt";
pub const DIT: &str = "dit";
pub const CLT: &str = "clt";

// Exceptions
pub const EXD: &str = "exd";
pub const EXF: &str = "exf";

// Custom dimensions and metrics
pub const CD_N: &str = "cd{}";
pub const CM_N: &str = "cm{}";

// Content experiments
pub const XID: &str = "xid";
pub const XVAR: &str = "xvar";
