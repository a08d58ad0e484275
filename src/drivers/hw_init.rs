//! One-shot hardware peripheral initialization and register shims.
//!
//! Configures the servo LEDC timer/channel, the status LED GPIO, and the
//! I2C slave peripheral using raw ESP-IDF sys calls.  Called once from
//! `main()` before the idle loop starts.
//!
//! The bus interrupt path lives here too: the peripheral's event handler
//! feeds the portable [`BusReceiver`](crate::bus::BusReceiver) through
//! [`dispatch_bus_event`], which is itself host-testable — only the
//! final register writes are cfg-gated.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::AtomicU32;

use crate::bus::{BusReceiver, BusState};
use crate::events::offer_command;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    LedcInitFailed,
    BusConfigFailed(i32),
    BusDriverInstallFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed => write!(f, "LEDC timer/channel config failed"),
            Self::BusConfigFailed(rc) => write!(f, "I2C slave config failed (rc={})", rc),
            Self::BusDriverInstallFailed(rc) => {
                write!(f, "I2C slave driver install failed (rc={})", rc)
            }
        }
    }
}

impl core::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the idle loop; single-threaded.
    unsafe {
        init_led_gpio()?;
        init_servo_ledc()?;
    }
    info!("hw_init: servo + LED peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Status LED GPIO ───────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_led_gpio() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::STATUS_LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }
    unsafe { gpio_set_level(pins::STATUS_LED_GPIO, 0) };
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_led_gpio().
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Servo LEDC PWM ────────────────────────────────────────────

/// Compare values are expressed in 0.5 µs units; one 20 ms period is
/// 40 000 of them.
const COMPARE_TICKS_PER_PERIOD: u32 = 40_000;

#[cfg(target_os = "espidf")]
unsafe fn init_servo_ledc() -> Result<(), HwInitError> {
    // Timer 0: servo refresh (50 Hz, 16-bit).
    // SAFETY: Called from single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_16_BIT,
        freq_hz: pins::SERVO_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    if unsafe { ledc_timer_config(&timer0) } != ESP_OK {
        return Err(HwInitError::LedcInitFailed);
    }

    // Channel 0: servo signal line, initially 0 (no pulse until the
    // startup sequence parks the hatch).
    let channel0 = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel: ledc_channel_t_LEDC_CHANNEL_0,
        timer_sel: ledc_timer_t_LEDC_TIMER_0,
        gpio_num: pins::SERVO_PWM_GPIO,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    if unsafe { ledc_channel_config(&channel0) } != ESP_OK {
        return Err(HwInitError::LedcInitFailed);
    }

    info!("hw_init: LEDC servo timer at {} Hz", pins::SERVO_PWM_FREQ_HZ);
    Ok(())
}

/// Write a pulse-table compare value to the servo PWM channel.
/// The peripheral latches it at the next period boundary.
#[cfg(target_os = "espidf")]
pub fn servo_set_compare(compare: u16) {
    let duty = (u32::from(compare) << pins::SERVO_PWM_RESOLUTION_BITS) / COMPARE_TICKS_PER_PERIOD;
    // SAFETY: channel 0 was configured in init_servo_ledc(); duty register
    // writes are race-free since only the main loop calls this function.
    unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, ledc_channel_t_LEDC_CHANNEL_0, duty);
        ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, ledc_channel_t_LEDC_CHANNEL_0);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn servo_set_compare(_compare: u16) {}

// ── Bus responder (I2C slave) ─────────────────────────────────
//
// The receiver state machine is pure and lives in `crate::bus`; this
// section owns its packed state (a single AtomicU8 so the interrupt
// handler never needs a lock) and the re-arm register write.

static BUS_STATE: AtomicU8 = AtomicU8::new(BusState::Idle as u8);

#[cfg(not(target_os = "espidf"))]
static REARM_COUNT: AtomicU32 = AtomicU32::new(0);

/// Drive the responder state machine with one hardware event.
///
/// Safe to call from interrupt context: the state round-trips through
/// an atomic, the mailbox push is lock-free, and the re-arm is a single
/// register write.  Every call re-arms exactly once — including the
/// desync paths — before returning.
pub fn dispatch_bus_event(raw_status: u8, data: u8) {
    let mut rx = BusReceiver::from_state(BusState::from_raw(BUS_STATE.load(Ordering::Acquire)));
    let action = rx.on_event(crate::bus::status::BusEvent::decode(raw_status, data));
    BUS_STATE.store(rx.state().to_raw(), Ordering::Release);

    if let Some(byte) = action.deliver {
        // A full mailbox means a sequence is still running; the byte is
        // dropped and counted there.
        let _ = offer_command(byte);
    }

    debug_assert!(action.rearm);
    bus_rearm();
}

/// Tell the bus peripheral "ready for the next byte, ack enabled".
/// Skipping this on any event path stalls the bus permanently.
#[cfg(target_os = "espidf")]
fn bus_rearm() {
    // SAFETY: FIFO reset + interrupt re-enable on an already-installed
    // slave driver; callable from ISR context.
    unsafe {
        i2c_reset_rx_fifo(BUS_PORT);
    }
}

#[cfg(not(target_os = "espidf"))]
fn bus_rearm() {
    REARM_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// Number of re-arms issued (host builds only; used by tests).
#[cfg(not(target_os = "espidf"))]
pub fn rearm_count() -> u32 {
    REARM_COUNT.load(Ordering::Relaxed)
}

/// Current packed responder state (for diagnostics and tests).
pub fn bus_state() -> BusState {
    BusState::from_raw(BUS_STATE.load(Ordering::Acquire))
}

/// Reset the responder to Idle (host tests between cases).
#[cfg(not(target_os = "espidf"))]
pub fn bus_reset_for_test() {
    BUS_STATE.store(BusState::Idle as u8, Ordering::SeqCst);
}

#[cfg(target_os = "espidf")]
const BUS_PORT: i2c_port_t = 0;

/// Configure the I2C peripheral as a slave at `address` and hook its
/// receive path into [`dispatch_bus_event`].
#[cfg(target_os = "espidf")]
pub fn init_bus_responder(address: u8) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the idle loop starts; the
    // ISR trampoline only runs after i2c_isr_register succeeds.
    unsafe {
        let cfg = i2c_config_t {
            mode: i2c_mode_t_I2C_MODE_SLAVE,
            sda_io_num: pins::BUS_SDA_GPIO,
            scl_io_num: pins::BUS_SCL_GPIO,
            sda_pullup_en: true,
            scl_pullup_en: true,
            __bindgen_anon_1: i2c_config_t__bindgen_ty_1 {
                slave: i2c_config_t__bindgen_ty_1__bindgen_ty_2 {
                    addr_10bit_en: 0,
                    slave_addr: u16::from(address),
                    maximum_speed: 400_000,
                },
            },
            ..Default::default()
        };
        let ret = i2c_param_config(BUS_PORT, &cfg);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::BusConfigFailed(ret));
        }

        let ret = i2c_driver_install(BUS_PORT, i2c_mode_t_I2C_MODE_SLAVE, 128, 0, 0);
        if ret != ESP_OK as i32 {
            return Err(HwInitError::BusDriverInstallFailed(ret));
        }
    }
    info!("hw_init: bus responder armed at {:#04x}", address);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_bus_responder(address: u8) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): bus responder at {:#04x} (no hardware)", address);
    Ok(())
}

/// Drain bytes the slave FIFO has collected since the last call and
/// replay them through the responder state machine.
///
/// The IDF slave driver has already handled addressing and acks at the
/// hardware level by the time a byte lands in its buffer, so each byte
/// is replayed as an address/data/stop event triplet.
#[cfg(target_os = "espidf")]
pub fn poll_bus(address: u8) {
    let _ = address;
    let mut byte = 0u8;
    loop {
        // SAFETY: i2c_slave_read_buffer with zero timeout is non-blocking
        // and only touches the driver's own ring buffer.
        let got = unsafe { i2c_slave_read_buffer(BUS_PORT, &mut byte, 1, 0) };
        if got != 1 {
            break;
        }
        dispatch_bus_event(crate::bus::status::ST_ADDRESSED_WRITE, 0);
        dispatch_bus_event(crate::bus::status::ST_DATA_ACKED, byte);
        dispatch_bus_event(crate::bus::status::ST_STOP, 0);
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn poll_bus(_address: u8) {}
