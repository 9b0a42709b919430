//! Shared record fixtures for unit tests.

use sift_core::{
    FieldDescriptor, FieldType, FieldValue, Fields, Record, Scalar, ScalarKind, Shape,
};

#[derive(Debug)]
pub(crate) struct Author {
    pub(crate) name: String,
}

#[derive(Debug)]
pub(crate) struct Book {
    pub(crate) title: String,
    pub(crate) pages: i64,
    pub(crate) rating: Option<f64>,
    pub(crate) subtitle: Option<String>,
    pub(crate) author: Author,
}

static AUTHOR_SHAPE: Shape = Shape {
    name: "Author",
    fields: &[FieldDescriptor {
        name: "Name",
        index: 0,
        ty: FieldType::Scalar {
            kind: ScalarKind::Str,
            nullable: false,
        },
    }],
};

static BOOK_SHAPE: Shape = Shape {
    name: "Book",
    fields: &[
        FieldDescriptor {
            name: "Title",
            index: 0,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Pages",
            index: 1,
            ty: FieldType::Scalar {
                kind: ScalarKind::I64,
                nullable: false,
            },
        },
        FieldDescriptor {
            name: "Rating",
            index: 2,
            ty: FieldType::Scalar {
                kind: ScalarKind::F64,
                nullable: true,
            },
        },
        FieldDescriptor {
            name: "Subtitle",
            index: 3,
            ty: FieldType::Scalar {
                kind: ScalarKind::Str,
                nullable: true,
            },
        },
        FieldDescriptor {
            name: "Author",
            index: 4,
            ty: FieldType::Nested {
                shape: &AUTHOR_SHAPE,
                nullable: false,
            },
        },
    ],
};

impl Fields for Author {
    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Scalar(Scalar::Str(self.name.clone())),
            _ => FieldValue::Null,
        }
    }
}

impl Fields for Book {
    fn field(&self, index: usize) -> FieldValue<'_> {
        match index {
            0 => FieldValue::Scalar(Scalar::Str(self.title.clone())),
            1 => FieldValue::Scalar(Scalar::I64(self.pages)),
            2 => match self.rating {
                Some(rating) => FieldValue::Scalar(Scalar::F64(rating)),
                None => FieldValue::Null,
            },
            3 => match &self.subtitle {
                Some(subtitle) => FieldValue::Scalar(Scalar::Str(subtitle.clone())),
                None => FieldValue::Null,
            },
            4 => FieldValue::Nested(&self.author),
            _ => FieldValue::Null,
        }
    }
}

impl Record for Book {
    const SHAPE: &'static Shape = &BOOK_SHAPE;
}

pub(crate) fn book(
    title: &str,
    pages: i64,
    rating: Option<f64>,
    subtitle: Option<&str>,
    author: &str,
) -> Book {
    Book {
        title: title.to_owned(),
        pages,
        rating,
        subtitle: subtitle.map(ToOwned::to_owned),
        author: Author {
            name: author.to_owned(),
        },
    }
}

pub(crate) fn books() -> Vec<Book> {
    vec![
        book("Parsing", 180, None, None, "Aho"),
        book("Sorting", 320, Some(3.9), Some("sorting algorithms"), "Knuth"),
        book("Searching", 410, Some(4.5), Some("how to search"), "Knuth"),
    ]
}
