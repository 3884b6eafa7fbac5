//! Device reset

/// Reset the MCU through the system control block
pub fn system_reset() -> ! {
    cortex_m::peripheral::SCB::sys_reset()
}
