//! Shared schema fixture for the integration suites.
//!
//! Models a small plant controller: one boiler group with every value shape
//! the registry supports, plus a conveyor group for dispatcher routing.

#![allow(dead_code)]

use tagdb::{
    AnyTag, Bounded, ByteReader, Group, GroupInfo, Persistence, ReadOnly, Tag, TagSet, TagValue,
    Version, WireError, WriteOnly,
};

pub const BOILER: GroupInfo = GroupInfo::new(0x4000, "boiler", Version::new(1, 2, 3));

pub const CONVEYOR: GroupInfo = GroupInfo::new(0x5000, "conveyor", Version::new(4, 5, 6))
    .with_persistence(Persistence::Cyclic);

/// Raw ADC reading alongside the converted value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorReading {
    pub raw: u32,
    pub celsius: f32,
}

impl TagValue for SensorReading {
    fn payload_len(&self) -> usize {
        8
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        self.raw.encode(buf);
        self.celsius.encode(buf);
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        let mut image = ByteReader::new(reader.take(8)?);
        Ok(SensorReading {
            raw: self.raw.decode(&mut image)?,
            celsius: self.celsius.decode(&mut image)?,
        })
    }
}

/// Controller state machine position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Mode {
    #[default]
    Booting = 0,
    Starting = 1,
    Finished = 2,
}

impl TagValue for Mode {
    fn payload_len(&self) -> usize {
        1
    }

    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(*self as u8);
    }

    fn decode(&self, reader: &mut ByteReader<'_>) -> Result<Self, WireError> {
        Ok(match reader.take(1)?[0] {
            1 => Mode::Starting,
            2 => Mode::Finished,
            _ => Mode::Booting,
        })
    }
}

/// The boiler group's schema, one field per tag.
pub struct BoilerTags {
    pub rpm: Tag<u32>,
    pub mode: Tag<Mode, ReadOnly>,
    pub sensor: Tag<SensorReading>,
    pub setpoint: Tag<u32, WriteOnly>,
    pub limit: Tag<Bounded<f32>>,
    pub samples: Tag<[u32; 4]>,
    pub label: Tag<String>,
}

impl TagSet for BoilerTags {
    fn visit(&self, f: &mut dyn FnMut(&dyn AnyTag)) {
        f(&self.rpm);
        f(&self.mode);
        f(&self.sensor);
        f(&self.setpoint);
        f(&self.limit);
        f(&self.samples);
        f(&self.label);
    }

    fn visit_mut(&mut self, f: &mut dyn FnMut(&mut dyn AnyTag)) {
        f(&mut self.rpm);
        f(&mut self.mode);
        f(&mut self.sensor);
        f(&mut self.setpoint);
        f(&mut self.limit);
        f(&mut self.samples);
        f(&mut self.label);
    }
}

pub fn boiler_group() -> Group<BoilerTags> {
    Group::new(
        BOILER,
        BoilerTags {
            rpm: Tag::with_value(&BOILER, 0x01, "rpm", Version::new(1, 0, 22), 900),
            mode: Tag::new(&BOILER, 0x02, "mode", Version::new(1, 0, 0)),
            sensor: Tag::with_value(
                &BOILER,
                0x03,
                "sensor",
                Version::new(2, 10, 223),
                SensorReading {
                    raw: 4711,
                    celsius: 123.0,
                },
            ),
            setpoint: Tag::new(&BOILER, 0x04, "setpoint", Version::new(0, 2, 3)),
            limit: Tag::with_value(
                &BOILER,
                0x05,
                "limit",
                Version::new(1, 0, 0),
                Bounded::new(60.0, -40.0, 85.0),
            ),
            samples: Tag::new(&BOILER, 0x06, "samples", Version::new(1, 0, 0)),
            label: Tag::with_value(
                &BOILER,
                0x07,
                "label",
                Version::new(1, 0, 0),
                "boiler-7".to_string(),
            ),
        },
    )
}

pub type ConveyorTags = (Tag<u32>, Tag<String>);

pub fn conveyor_group() -> Group<ConveyorTags> {
    Group::new(
        CONVEYOR,
        (
            Tag::with_value(&CONVEYOR, 0x01, "speed", Version::new(1, 0, 0), 50),
            Tag::with_value(
                &CONVEYOR,
                0x02,
                "belt",
                Version::new(1, 0, 0),
                "belt-a".to_string(),
            ),
        ),
    )
}
