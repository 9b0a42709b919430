//! Integration tests for the sift expression pipeline.
//!
//! Exercises the public surface end-to-end: filter strings and ordering
//! specifications applied to typed record sequences through
//! [`sift_expr::SiftExt`], plus the universal properties the pipeline
//! guarantees.
//!
//! Run with `cargo test -p sift-integration`. Set `RUST_LOG=debug` to see
//! resolver and compiler tracing.

use std::sync::Once;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use sift_core::{
    FieldDescriptor, FieldType, FieldValue, Fields, Record, Scalar, ScalarKind, Shape,
};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A postal address nested inside [`Person`].
#[derive(Debug)]
pub struct Address {
    /// City name.
    pub city: String,
    /// State code.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
}

/// The reference record used by the end-to-end scenarios.
#[derive(Debug)]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: i32,
    /// Home address.
    pub address: Address,
}

static ADDRESS_SHAPE: Shape = Shape {
    name: "Address",
    fields: &[
        FieldDescriptor {
            name: "City",
            index: 0,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "State",
            index: 1,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "ZipCode",
            index: 2,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
    ],
};

static PERSON_SHAPE: Shape = Shape {
    name: "Person",
    fields: &[
        FieldDescriptor {
            name: "FirstName",
            index: 0,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "LastName",
            index: 1,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Age",
            index: 2,
            ty: FieldType::Scalar {
                kind: ScalarKind::I32,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Address",
            index: 3,
            ty: FieldType::Nested {
                shape: &ADDRESS_SHAPE,
                nullable: false,
            },
        },
    ],
};

impl Fields for Address {
    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Scalar(Scalar::Str(self.city.clone())),
            1 => FieldValue::Scalar(Scalar::Str(self.state.clone())),
            2 => FieldValue::Scalar(Scalar::Str(self.zip_code.clone())),
            _ => FieldValue::Null,
        }
    }
}

impl Fields for Person {
    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Scalar(Scalar::Str(self.first_name.clone())),
            1 => FieldValue::Scalar(Scalar::Str(self.last_name.clone())),
            2 => FieldValue::Scalar(Scalar::I32(self.age)),
            3 => FieldValue::Nested(&self.address),
            _ => FieldValue::Null,
        }
    }
}

impl Record for Person {
    const SHAPE: &'static Shape = &PERSON_SHAPE;
}

fn person(
    first_name: &str,
    last_name: &str,
    age: i32,
    city: &str,
    state: &str,
    zip_code: &str,
) -> Person {
    Person {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        age,
        address: Address {
            city: city.to_owned(),
            state: state.to_owned(),
            zip_code: zip_code.to_owned(),
        },
    }
}

/// The five-person reference set.
#[must_use]
pub fn people() -> Vec<Person> {
    vec![
        person("John", "Doe", 30, "New York", "NY", "10001"),
        person("Jane", "Smith", 25, "Los Angeles", "CA", "90001"),
        person("Bob", "Johnson", 35, "Chicago", "IL", "60601"),
        person("Alice", "Williams", 28, "Houston", "TX", "77001"),
        person("Charlie", "Brown", 30, "Phoenix", "AZ", "85001"),
    ]
}

/// First names of a record sequence, in order.
#[must_use]
pub fn first_names(records: &[Person]) -> Vec<&str> {
    records.iter().map(|p| p.first_name.as_str()).collect()
}

/// A record exercising the wider scalar palette: UUID, decimal, date,
/// boolean, and a nullable string.
pub struct Employee {
    /// Stable identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Optional nickname.
    pub nickname: Option<String>,
    /// Annual salary.
    pub salary: Decimal,
    /// Hire date.
    pub hired: NaiveDate,
    /// Whether the employee is currently active.
    pub active: bool,
}

static EMPLOYEE_SHAPE: Shape = Shape {
    name: "Employee",
    fields: &[
        FieldDescriptor {
            name: "Id",
            index: 0,
            ty: FieldType::Scalar {
                kind: ScalarKind::Uuid,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Name",
            index: 1,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Nickname",
            index: 2,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: true,
            },
        },
        FieldDescriptor {
            name: "Salary",
            index: 3,
            ty: FieldType::Scalar {
                kind: ScalarKind::Decimal,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Hired",
            index: 4,
            ty: FieldType::Scalar {
                kind: ScalarKind::Date,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Active",
            index: 5,
            ty: FieldType::Scalar {
                kind: ScalarKind::Bool,
                nullable: false,
            },
        },
    ],
};

impl Fields for Employee {
    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Scalar(Scalar::Uuid(self.id)),
            1 => FieldValue::Scalar(Scalar::Str(self.name.clone())),
            2 => match &self.nickname {
                Some(nickname) => FieldValue::Scalar(Scalar::Str(nickname.clone())),
                None => FieldValue::Null,
            },
            3 => FieldValue::Scalar(Scalar::Decimal(self.salary)),
            4 => FieldValue::Scalar(Scalar::Date(self.hired)),
            5 => FieldValue::Scalar(Scalar::Bool(self.active)),
            _ => FieldValue::Null,
        }
    }
}

impl Record for Employee {
    const SHAPE: &'static Shape = &EMPLOYEE_SHAPE;
}

/// Fixed identifier of the first employee, for equality filters.
pub const GRACE_ID: &str = "a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6";

fn employee(
    id: &str,
    name: &str,
    nickname: Option<&str>,
    salary: Decimal,
    hired: NaiveDate,
    active: bool,
) -> Employee {
    Employee {
        id: Uuid::parse_str(id).unwrap_or_else(|e| panic!("bad fixture uuid {id}: {e}")),
        name: name.to_owned(),
        nickname: nickname.map(ToOwned::to_owned),
        salary,
        hired,
        active,
    }
}

/// Three employees covering null and non-null nicknames.
#[must_use]
pub fn employees() -> Vec<Employee> {
    vec![
        employee(
            GRACE_ID,
            "Grace",
            None,
            Decimal::new(12_000_000, 2),
            NaiveDate::from_ymd_opt(2015, 9, 1).unwrap_or_default(),
            true,
        ),
        employee(
            "b1b2b3b4-c1c2-d1d2-e1e2-f1f2f3f4f5f6",
            "Alan",
            Some("Al"),
            Decimal::new(9_500_050, 2),
            NaiveDate::from_ymd_opt(2018, 3, 15).unwrap_or_default(),
            false,
        ),
        employee(
            "c1c2c3c4-d1d2-e1e2-f1f2-a1a2a3a4a5a6",
            "Barbara",
            Some("Barb"),
            Decimal::new(11_000_000, 2),
            NaiveDate::from_ymd_opt(2012, 1, 20).unwrap_or_default(),
            true,
        ),
    ]
}

/// Names of an employee sequence, in order.
#[must_use]
pub fn employee_names(records: &[Employee]) -> Vec<&str> {
    records.iter().map(|e| e.name.as_str()).collect()
}
