pub use gelato_constants::{
    load_address, load_string, load_string_opt, load_u16, load_u16_opt, load_u64, load_url,
    load_url_opt, ConfigError, GelatoConstants, Handler, NATIVE_TOKEN_ADDRESS,
};
