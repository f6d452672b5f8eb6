pub struct Flag;
impl Flag {
    pub const MULTIPLEX_64: u8 = 0x3F;
    pub const DISPLAY_OFFSET_NONE: u8 = 0x00;
    pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
    pub const COM_PINS_SEQUENTIAL: u8 = 0x02;
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;
    pub const CONTRAST_DEFAULT: u8 = 0x7F;
    pub const CLOCK_DIV_DEFAULT: u8 = 0x80;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
}

/// Control bytes prefixed to every I2C transaction
pub struct Control;
impl Control {
    /// Co = 1, D/C# = 0: one command byte follows
    pub const SINGLE_COMMAND: u8 = 0x80;
    /// Co = 0, D/C# = 0: the rest of the transaction is commands
    pub const COMMAND_STREAM: u8 = 0x00;
    /// Co = 0, D/C# = 1: the rest of the transaction is GDDRAM data
    pub const DATA_STREAM: u8 = 0x40;
}
