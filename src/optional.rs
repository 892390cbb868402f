use std::cmp::Ordering;

use crate::comparator::Comparator;

/// Lifts `cmp` to optional values.
///
/// `None` equals `None` and sorts before every `Some`; two `Some`s are
/// compared with `cmp`.
pub fn optional_lift<T: 'static>(cmp: Comparator<T>) -> Comparator<Option<T>> {
    let name = format!("optional({})", cmp.name());
    Comparator::with_name(name, move |a: &Option<T>, b: &Option<T>| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp.compare(a, b),
    })
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use crate::comparator::{by, natural};

    use super::optional_lift;

    #[test]
    fn absent_sorts_first() {
        let cmp = optional_lift(natural::<i32>());
        for v in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert!(cmp.less(&None, &Some(v)), "v: {v}");
            assert!(cmp.greater(&Some(v), &None), "v: {v}");
        }
        assert_eq!(cmp.compare(&None, &None), Ordering::Equal);
    }

    #[test]
    fn present_values_delegate() {
        let cmp = optional_lift(natural::<i32>().reversed());
        assert!(cmp.less(&Some(5), &Some(1)));
        assert!(cmp.equal(&Some(3), &Some(3)));
        // absent stays first even when the inner comparator is reversed
        assert!(cmp.less(&None, &Some(1)));
    }

    #[test]
    fn method_form_and_sorting() {
        let cmp = by(|s: &String| s.len()).optional();
        assert_eq!(cmp.name(), "optional(by)");

        let mut values = vec![Some("ccc".to_string()), None, Some("a".to_string()), None];
        values.sort_by(cmp.as_fn());
        assert_eq!(
            values,
            vec![None, None, Some("a".to_string()), Some("ccc".to_string())]
        );
    }

    #[test]
    fn lifted_float_keeps_nan_rules() {
        let cmp = natural::<f64>().optional();
        assert!(cmp.less(&None, &Some(f64::NAN)));
        assert!(cmp.less(&Some(f64::NAN), &Some(0.0)));
        assert!(cmp.equal(&Some(-0.0), &Some(0.0)));
    }
}
