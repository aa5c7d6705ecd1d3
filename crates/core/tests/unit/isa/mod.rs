pub mod decode_properties;
pub mod disasm;
