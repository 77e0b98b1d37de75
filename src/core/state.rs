bitflags! {
    /// Bits of the EBC `Flags` register.
    pub struct VmFlags: u64 {
        /// Condition code, set by the CMP family and read by JMP/JMPcc.
        const CC = 0x0000_0001;
        /// Single step; the VM traps after each instruction.
        const STEP = 0x0000_0002;
    }
}
