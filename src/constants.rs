pub const MEMORY_SIZE: usize = 256;
pub const REGISTER_COUNT: usize = 7;
