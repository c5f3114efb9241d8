//! Slice Converter Tests
//!
//! End-to-end behaviour of `convert_slice` and `convert_value_slice`:
//! nil and empty sources, numeric widening, pointer elements, record
//! narrowing and widening, and the failure modes.

use toolkit_core::{
    convert_slice, convert_value_slice, impl_newtype, impl_record, ConversionFailure,
    ConvertError, Reflect, Value,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Source {
    id: i64,
    name: String,
    val: f64,
}
impl_record!(Source { id, name, val });

#[derive(Debug, Default, Clone, PartialEq)]
struct Narrow {
    id: i64,
    name: String,
}
impl_record!(Narrow { id, name });

#[derive(Debug, Default, Clone, PartialEq)]
struct Full {
    id: i64,
    name: String,
    val: f64,
}
impl_record!(Full { id, name, val });

#[derive(Debug, Default, Clone, PartialEq)]
struct Wide {
    id: i64,
    name: String,
    val: f64,
    note: String,
    parent: Option<i64>,
}
impl_record!(Wide { id, name, val, note, parent });

#[derive(Debug, Default, Clone, PartialEq)]
struct Clashing {
    id: bool,
}
impl_record!(Clashing { id });

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Score(i32);
impl_newtype!(Score(i32));

#[derive(Debug, Default, Clone, PartialEq)]
struct Label(String);
impl_newtype!(Label(String));

fn sources() -> Vec<Source> {
    vec![
        Source {
            id: 1,
            name: "Alice".into(),
            val: 1.1,
        },
        Source {
            id: 2,
            name: "Bob".into(),
            val: 2.2,
        },
    ]
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod static_conversion {
    use super::*;

    #[test]
    fn test_ints_to_floats() {
        let dest = convert_slice(&[1i32, 2, 3][..], &0f64).unwrap();
        assert_eq!(dest, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_nil_source_is_an_error() {
        let err = convert_slice(None::<&[i32]>, &0f64).unwrap_err();
        assert_eq!(err, ConvertError::NilSource);
        assert_eq!(err.to_string(), "source slice is nil");
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_empty_source_gives_empty_output() {
        let empty: Vec<i32> = Vec::new();
        let dest = convert_slice(empty.as_slice(), &0f64).unwrap();
        assert!(dest.is_empty());
    }

    #[test]
    fn test_pointer_elements_are_dereferenced() {
        let src = vec![Some(1i64), Some(2), Some(3)];
        let dest = convert_slice(src.as_slice(), &0f64).unwrap();
        assert_eq!(dest, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_boxed_and_borrowed_elements() {
        let boxed = vec![Box::new(4u8), Box::new(5u8)];
        assert_eq!(convert_slice(boxed.as_slice(), &0u64).unwrap(), vec![4, 5]);

        let (a, b) = (7i16, 8i16);
        let borrowed = vec![&a, &b];
        assert_eq!(convert_slice(borrowed.as_slice(), &0i32).unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_record_narrowing_drops_fields() {
        let dest = convert_slice(sources().as_slice(), &Narrow::default()).unwrap();
        assert_eq!(
            dest,
            vec![
                Narrow {
                    id: 1,
                    name: "Alice".into()
                },
                Narrow {
                    id: 2,
                    name: "Bob".into()
                },
            ]
        );
    }

    #[test]
    fn test_identical_layout_is_a_copy() {
        let dest = convert_slice(sources().as_slice(), &Full::default()).unwrap();
        assert_eq!(
            dest,
            vec![Full {
                id: 1,
                name: "Alice".into(),
                val: 1.1
            }, Full {
                id: 2,
                name: "Bob".into(),
                val: 2.2
            }]
        );

        let same = convert_slice(sources().as_slice(), &Source::default()).unwrap();
        assert_eq!(same, sources());
    }

    #[test]
    fn test_record_widening_zero_fills() {
        let dest = convert_slice(&sources()[..1], &Wide::default()).unwrap();
        assert_eq!(
            dest,
            vec![Wide {
                id: 1,
                name: "Alice".into(),
                val: 1.1,
                note: String::new(),
                parent: None,
            }]
        );
    }

    #[test]
    fn test_null_record_amid_populated() {
        let src = vec![Some(sources()[0].clone()), None, Some(sources()[1].clone())];
        let dest = convert_slice(src.as_slice(), &Narrow::default()).unwrap();
        assert_eq!(
            dest,
            vec![
                Narrow {
                    id: 1,
                    name: "Alice".into()
                },
                Narrow::default(),
                Narrow {
                    id: 2,
                    name: "Bob".into()
                },
            ]
        );
    }

    #[test]
    fn test_shared_field_with_other_type_aborts() {
        let err = convert_slice(sources().as_slice(), &Clashing::default()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::FieldTypeMismatch {
                index: 0,
                field: "id".into(),
                from: "i64".into(),
                to: "bool".into(),
            }
        );
    }

    #[test]
    fn test_record_to_number_fails_with_index() {
        let err = convert_slice(sources().as_slice(), &0i32).unwrap_err();
        assert_eq!(err.index(), Some(0));
        assert!(err
            .to_string()
            .starts_with("cannot convert element at index 0 from type Source to i32"));
    }

    #[test]
    fn test_number_to_record_fails() {
        let err = convert_slice(&[1i32, 2, 3][..], &Source::default()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ElementConversion {
                index: 0,
                reason: ConversionFailure::NoStrategy,
                ..
            }
        ));
    }

    #[test]
    fn test_numbers_and_bools_never_become_strings() {
        init_logging();
        let err = convert_slice(&[65i32][..], &String::new()).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::ElementConversion {
                reason: ConversionFailure::TextualTarget,
                ..
            }
        ));

        let err = convert_slice(&[true][..], &String::new()).unwrap_err();
        assert!(err.to_string().contains("numeric/bool"));

        let err = convert_slice(&[Score(5)][..], &Label::default()).unwrap_err();
        assert!(err.to_string().contains("cannot convert element at index 0"));
    }

    #[test]
    fn test_first_failure_wins() {
        let src = vec![Some(1i32), None, Some(3)];
        let ok = convert_slice(src.as_slice(), &0u8).unwrap();
        assert_eq!(ok, vec![1, 0, 3]);

        let mixed = vec![Value::I32(1), Value::Bool(true), Value::String("x".into())];
        let err = convert_slice(mixed.as_slice(), &0i64).unwrap_err();
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn test_named_scalars_convert_to_underlying_and_back() {
        let scores = vec![Score(3), Score(9)];
        let raw = convert_slice(scores.as_slice(), &0i32).unwrap();
        assert_eq!(raw, vec![3, 9]);

        let back = convert_slice(raw.as_slice(), &Score::default()).unwrap();
        assert_eq!(back, scores);

        let widened = convert_slice(scores.as_slice(), &0f32).unwrap();
        assert_eq!(widened, vec![3.0, 9.0]);
    }

    #[test]
    fn test_dynamic_elements_unwrap() {
        let src = vec![Value::I64(1), Value::Nil, Value::I64(3)];
        let dest = convert_slice(src.as_slice(), &0i64).unwrap();
        assert_eq!(dest, vec![1, 0, 3]);
    }

    #[test]
    fn test_dynamic_pointer_elements_are_dereferenced() {
        let src = vec![
            Value::Ptr(Box::new(Value::I32(1))),
            Value::Ptr(Box::new(Value::Nil)),
            Value::Ptr(Box::new(Value::U8(3))),
        ];
        let dest = convert_slice(src.as_slice(), &0f64).unwrap();
        assert_eq!(dest, vec![1.0, 0.0, 3.0]);
    }

    #[test]
    fn test_anything_assigns_to_value() {
        let dest = convert_slice(sources().as_slice(), &Value::Nil).unwrap();
        assert_eq!(dest.len(), 2);
        assert_eq!(dest[0], sources()[0].to_value());
    }

    #[test]
    fn test_sample_value_is_irrelevant() {
        let a = convert_slice(&[1u16, 2][..], &0f64).unwrap();
        let b = convert_slice(&[1u16, 2][..], &99.5f64).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod dynamic_conversion {
    use super::*;

    #[test]
    fn test_nil_and_non_slice_sources() {
        assert_eq!(
            convert_value_slice(&Value::Nil, &Value::I64(0)),
            Err(ConvertError::NilSource)
        );
        let err = convert_value_slice(&Value::I32(4), &Value::I64(0)).unwrap_err();
        assert_eq!(
            err,
            ConvertError::NotASlice {
                found: "i32".into()
            }
        );
    }

    #[test]
    fn test_heterogeneous_numbers() {
        let src = Value::Seq(vec![
            Value::I8(1),
            Value::U64(2),
            Value::Nil,
            Value::Ptr(Box::new(Value::F32(3.0))),
            Value::Dyn(Box::new(Value::Isize(4))),
        ]);
        let dest = convert_value_slice(&src, &Value::F64(0.0)).unwrap();
        assert_eq!(
            dest,
            vec![
                Value::F64(1.0),
                Value::F64(2.0),
                Value::F64(0.0),
                Value::F64(3.0),
                Value::F64(4.0),
            ]
        );
    }

    #[test]
    fn test_containers_holding_pointers() {
        let src = Value::Seq(vec![
            Value::Dyn(Box::new(Value::Ptr(Box::new(Value::I32(2))))),
            Value::Dyn(Box::new(Value::Ptr(Box::new(Value::Nil)))),
            Value::Ptr(Box::new(Value::Dyn(Box::new(Value::I16(5))))),
        ]);
        let dest = convert_value_slice(&src, &Value::F64(0.0)).unwrap();
        assert_eq!(dest, vec![Value::F64(2.0), Value::F64(0.0), Value::F64(5.0)]);
    }

    #[test]
    fn test_empty_sequence() {
        let dest = convert_value_slice(&Value::Seq(Vec::new()), &Value::Bool(false)).unwrap();
        assert!(dest.is_empty());
    }

    #[test]
    fn test_records_by_sample() {
        let src = Value::Seq(sources().iter().map(Reflect::to_value).collect());
        let sample = Narrow::default().to_value();
        let dest = convert_value_slice(&src, &sample).unwrap();
        assert_eq!(
            dest[1],
            Narrow {
                id: 2,
                name: "Bob".into()
            }
            .to_value()
        );
    }

    #[test]
    fn test_nested_sequences_are_unsupported() {
        let src = Value::Seq(vec![Value::Seq(vec![Value::I32(1)])]);
        let err = convert_value_slice(&src, &Value::I32(0)).unwrap_err();
        assert_eq!(err.index(), Some(0));

        let passthrough = convert_value_slice(&src, &Value::Nil).unwrap();
        assert_eq!(passthrough, vec![Value::Seq(vec![Value::I32(1)])]);
    }
}
