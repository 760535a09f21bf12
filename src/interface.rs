//! The bus transport between the driver and the controller. The controller distinguishes command
//! bytes from display data bytes by the level of its A0 line; everything else about the electrical
//! protocol is the transport's business.

/// A transport capable of delivering command and data bytes to the controller.
///
/// Neither operation has any acknowledgement from the controller. The only errors a transport can
/// report are its own, e.g. a GPIO expander failing to set a pin.
pub trait DisplayInterface {
    type Error;

    /// Send a single byte with A0 low (command mode).
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send a run of display data bytes with A0 high. `buf` is in logical order, i.e. the first
    /// byte is the leftmost column of the page being written.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
}

pub mod parallel {
    //! The 8-bit parallel interface of the controller in 6800 mode, driven by bit-banging GPIOs.
    //! The R/W line is assumed to be tied (or held) low, since the driver never reads back from
    //! the controller.

    use hal::digital::v2::OutputPin;

    use super::DisplayInterface;

    /// Eight data lines D0-D7 which can be set in one operation.
    pub trait DataBus {
        type Error;

        /// Drive the data lines to `byte`, D0 being the least significant bit.
        fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
    }

    impl<P> DataBus for [P; 8]
    where
        P: OutputPin,
    {
        type Error = P::Error;

        fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
            for (bit, pin) in self.iter_mut().enumerate() {
                if byte & (1 << bit) != 0 {
                    pin.set_high()?;
                } else {
                    pin.set_low()?;
                }
            }
            Ok(())
        }
    }

    /// The order in which `send_data` puts the bytes of a buffer onto the bus.
    #[derive(Clone, Copy, Debug, PartialEq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum DataOrder {
        /// First byte of the buffer first.
        Forward,
        /// Last byte of the buffer first. Some boards wire the segment lines so that the
        /// controller's column counter runs right to left across the glass; walking the buffer
        /// backwards keeps the logical buffer the right way round.
        Reverse,
    }

    pub struct ParallelInterface<BUS, A0, E, CS> {
        /// The D0-D7 data lines.
        bus: BUS,
        /// The A0 (RS) line, low for commands and high for display data.
        a0: A0,
        /// The E (RD) enable strobe. Data is latched on its falling edge.
        enable: E,
        /// The active-low chip select CS1.
        cs: CS,
        order: DataOrder,
    }

    impl<BUS, A0, E, CS> ParallelInterface<BUS, A0, E, CS>
    where
        BUS: DataBus,
        A0: OutputPin<Error = BUS::Error>,
        E: OutputPin<Error = BUS::Error>,
        CS: OutputPin<Error = BUS::Error>,
    {
        /// Create a new parallel interface which sends display data in forward order.
        pub fn new(bus: BUS, a0: A0, enable: E, cs: CS) -> Self {
            Self {
                bus,
                a0,
                enable,
                cs,
                order: DataOrder::Forward,
            }
        }

        /// Change the order in which display data bytes are put on the bus.
        pub fn data_order(self, order: DataOrder) -> Self {
            Self { order, ..self }
        }

        /// Release the pins.
        pub fn release(self) -> (BUS, A0, E, CS) {
            (self.bus, self.a0, self.enable, self.cs)
        }

        fn latch(&mut self, byte: u8) -> Result<(), BUS::Error> {
            self.bus.write_byte(byte)?;
            self.cs.set_low()?;
            self.enable.set_high()?;
            self.enable.set_low()?;
            self.cs.set_high()
        }
    }

    impl<BUS, A0, E, CS> DisplayInterface for ParallelInterface<BUS, A0, E, CS>
    where
        BUS: DataBus,
        A0: OutputPin<Error = BUS::Error>,
        E: OutputPin<Error = BUS::Error>,
        CS: OutputPin<Error = BUS::Error>,
    {
        type Error = BUS::Error;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.a0.set_low()?;
            self.latch(cmd)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.a0.set_high()?;
            match self.order {
                DataOrder::Forward => {
                    for &byte in buf.iter() {
                        self.latch(byte)?;
                    }
                }
                DataOrder::Reverse => {
                    for &byte in buf.iter().rev() {
                        self.latch(byte)?;
                    }
                }
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use core::convert::Infallible;
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::vec::Vec;

        /// Shared view of the simulated wires. Every falling edge of E while CS is low latches
        /// `(a0, data)`.
        #[derive(Default)]
        struct Wires {
            data: u8,
            a0: bool,
            enable: bool,
            cs: bool,
            latched: Vec<(bool, u8)>,
        }

        #[derive(Clone, Copy)]
        enum Line {
            Data(u8),
            A0,
            Enable,
            Cs,
        }

        struct Pin(Line, Rc<RefCell<Wires>>);

        impl OutputPin for Pin {
            type Error = Infallible;

            fn set_low(&mut self) -> Result<(), Infallible> {
                self.set(false);
                Ok(())
            }

            fn set_high(&mut self) -> Result<(), Infallible> {
                self.set(true);
                Ok(())
            }
        }

        impl Pin {
            fn set(&mut self, level: bool) {
                let mut w = self.1.borrow_mut();
                match self.0 {
                    Line::Data(bit) => {
                        if level {
                            w.data |= 1 << bit;
                        } else {
                            w.data &= !(1 << bit);
                        }
                    }
                    Line::A0 => w.a0 = level,
                    Line::Enable => {
                        if w.enable && !level && !w.cs {
                            let sample = (w.a0, w.data);
                            w.latched.push(sample);
                        }
                        w.enable = level;
                    }
                    Line::Cs => w.cs = level,
                }
            }
        }

        fn wired() -> (ParallelInterface<[Pin; 8], Pin, Pin, Pin>, Rc<RefCell<Wires>>) {
            let wires = Rc::new(RefCell::new(Wires {
                cs: true,
                ..Wires::default()
            }));
            let d = |bit| Pin(Line::Data(bit), wires.clone());
            let bus = [d(0), d(1), d(2), d(3), d(4), d(5), d(6), d(7)];
            let iface = ParallelInterface::new(
                bus,
                Pin(Line::A0, wires.clone()),
                Pin(Line::Enable, wires.clone()),
                Pin(Line::Cs, wires.clone()),
            );
            (iface, wires)
        }

        #[test]
        fn command_latched_with_a0_low() {
            let (mut iface, wires) = wired();
            iface.send_command(0xAF).unwrap();
            assert_eq!(wires.borrow().latched, [(false, 0xAF)]);
            assert!(wires.borrow().cs);
        }

        #[test]
        fn data_latched_forward() {
            let (mut iface, wires) = wired();
            iface.send_data(&[0x01, 0x80, 0x5A]).unwrap();
            assert_eq!(
                wires.borrow().latched,
                [(true, 0x01), (true, 0x80), (true, 0x5A)]
            );
        }

        #[test]
        fn data_latched_reverse() {
            let (iface, wires) = wired();
            let mut iface = iface.data_order(DataOrder::Reverse);
            iface.send_command(0xB0).unwrap();
            iface.send_data(&[0x01, 0x80, 0x5A]).unwrap();
            assert_eq!(
                wires.borrow().latched,
                [(false, 0xB0), (true, 0x5A), (true, 0x80), (true, 0x01)]
            );
        }
    }
}

#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on whatever was sent to it.

    use super::DisplayInterface;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Sent {
        Cmd(u8),
        Data(Vec<u8>),
    }

    /// Records every transfer. Clones made with `split` share the same log, so a test can hand
    /// one to the `Display` and keep the other for checking.
    pub struct TestSpyInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }
        pub fn split(&self) -> Self {
            TestSpyInterface {
                sent: self.sent.clone(),
            }
        }
        pub fn check(&self, cmd: u8, data: &[u8]) {
            let sent = self.sent.borrow();
            assert_eq!(sent.first(), Some(&Sent::Cmd(cmd)));
            let mut got = Vec::new();
            for s in sent[1..].iter() {
                match s {
                    Sent::Data(d) => got.extend_from_slice(d),
                    Sent::Cmd(c) => got.push(*c),
                }
            }
            assert_eq!(&got[..], data);
        }
        pub fn check_multi(&self, expect: &[Sent]) {
            assert_eq!(&self.sent.borrow()[..], expect);
        }
        pub fn sent(&self) -> Vec<Sent> {
            self.sent.borrow().clone()
        }
        pub fn clear(&mut self) {
            self.sent.borrow_mut().clear()
        }
    }

    impl DisplayInterface for TestSpyInterface {
        type Error = Infallible;

        fn send_command(&mut self, cmd: u8) -> Result<(), Infallible> {
            self.sent.borrow_mut().push(Sent::Cmd(cmd));
            Ok(())
        }
        fn send_data(&mut self, data: &[u8]) -> Result<(), Infallible> {
            self.sent.borrow_mut().push(Sent::Data(data.to_vec()));
            Ok(())
        }
    }
}
