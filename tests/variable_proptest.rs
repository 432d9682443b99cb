use logician::{AnyVariable, Bindings, Variable};
use proptest::prelude::*;
use proptest::test_runner::{TestCaseResult, TestRunner};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

fn run_proptest<S, F>(strategy: S, test: F)
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    let mut runner = TestRunner::default();
    runner.run(&strategy, test).unwrap();
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Add(i32),
    Mul(i32),
    Xor(i32),
}

impl Step {
    fn apply(self, n: i32) -> i32 {
        match self {
            Step::Add(k) => n.wrapping_add(k),
            Step::Mul(k) => n.wrapping_mul(k),
            Step::Xor(k) => n ^ k,
        }
    }
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<i32>().prop_map(Step::Add),
        any::<i32>().prop_map(Step::Mul),
        any::<i32>().prop_map(Step::Xor),
    ]
}

proptest! {
    #[test]
    fn test_chained_maps_match_composition(
        steps in proptest::collection::vec(step(), 1..12),
        bound in any::<i32>(),
    ) {
        let x = Variable::<i32>::new();

        let chained = steps
            .iter()
            .fold(x.property(), |p, &s| p.map(move |n| s.apply(*n)));

        let composed_steps = steps.clone();
        let composed = x.map(move |n| composed_steps.iter().fold(*n, |acc, s| s.apply(acc)));

        prop_assert_eq!(chained.evaluate(&bound).unwrap(), composed.evaluate(&bound).unwrap());
    }

    #[test]
    fn test_erased_store_matches_insertion(
        labels in proptest::collection::vec(any::<u16>(), 1..64),
    ) {
        let variables: Vec<Variable<u16>> = labels.iter().map(|_| Variable::new()).collect();

        let mut store: HashMap<AnyVariable, u16> = HashMap::new();
        for (variable, label) in variables.iter().zip(&labels).rev() {
            store.insert(variable.erase(), *label);
        }

        prop_assert_eq!(store.len(), labels.len());
        for (variable, label) in variables.iter().zip(&labels) {
            prop_assert_eq!(store.get(&variable.erase()), Some(label));
        }
    }
}

#[test]
fn test_fresh_handles_are_unique() {
    run_proptest(1usize..256, |count| {
        let handles: HashSet<AnyVariable> = (0..count).map(|_| Variable::<()>::new().erase()).collect();
        prop_assert_eq!(handles.len(), count);
        Ok(())
    });
}

#[test]
fn test_equal_handles_hash_equally() {
    run_proptest(any::<bool>(), |retype| {
        let x = Variable::<i64>::new();
        let other = if retype {
            x.erase().typed::<String>().erase()
        } else {
            x.erase()
        };
        prop_assert_eq!(x.erase(), other);
        prop_assert_eq!(hash_of(&x.erase()), hash_of(&other));
        Ok(())
    });
}

#[test]
fn test_identity_property_returns_bound_value() {
    run_proptest(".*", |text: String| {
        let x = Variable::<String>::new();
        let mut bindings = Bindings::new();
        bindings.bind(x, text.clone()).unwrap();

        prop_assert_eq!(&x.property().evaluate(&text).unwrap(), &text);
        prop_assert_eq!(&bindings.evaluate(&x).unwrap(), &text);
        Ok(())
    });
}
