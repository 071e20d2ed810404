// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Heterogeneous fixture records for keyed operators.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plant {
    pub species: String,
    pub height: u32,
}

/// Which kind of record a [`TestData`] holds; the usual grouping key in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataVariant {
    Person,
    Animal,
    Plant,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    #[must_use]
    pub const fn variant(&self) -> DataVariant {
        match self {
            Self::Person(_) => DataVariant::Person,
            Self::Animal(_) => DataVariant::Animal,
            Self::Plant(_) => DataVariant::Plant,
        }
    }

    /// Age, leg count or height: one number per record for numeric operators.
    #[must_use]
    pub const fn measure(&self) -> u32 {
        match self {
            Self::Person(p) => p.age,
            Self::Animal(a) => a.legs,
            Self::Plant(p) => p.height,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.name,
            Self::Plant(p) => &p.species,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "Person[name={}, age={}]", p.name, p.age),
            Self::Animal(a) => write!(f, "Animal[name={}, legs={}]", a.name, a.legs),
            Self::Plant(p) => write!(f, "Plant[species={}, height={}]", p.species, p.height),
        }
    }
}

#[must_use]
pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

#[must_use]
pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        name: name.to_string(),
        legs,
    })
}

#[must_use]
pub fn plant(species: &str, height: u32) -> TestData {
    TestData::Plant(Plant {
        species: species.to_string(),
        height,
    })
}

#[must_use]
pub fn person_alice() -> TestData {
    person("Alice", 25)
}

#[must_use]
pub fn person_bob() -> TestData {
    person("Bob", 30)
}

#[must_use]
pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

#[must_use]
pub fn person_diane() -> TestData {
    person("Diane", 40)
}

#[must_use]
pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

#[must_use]
pub fn animal_cat() -> TestData {
    animal("Cat", 4)
}

#[must_use]
pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

#[must_use]
pub fn animal_bird() -> TestData {
    animal("Bird", 2)
}

#[must_use]
pub fn plant_rose() -> TestData {
    plant("Rose", 15)
}

#[must_use]
pub fn plant_fern() -> TestData {
    plant("Fern", 150)
}

/// People, animals and plants interleaved in runs:
/// `alice, bob, dog, cat, rose, charlie, spider, fern`.
#[must_use]
pub fn mixed_records() -> Vec<TestData> {
    vec![
        person_alice(),
        person_bob(),
        animal_dog(),
        animal_cat(),
        plant_rose(),
        person_charlie(),
        animal_spider(),
        plant_fern(),
    ]
}
