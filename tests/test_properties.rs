//! Property tests for terms and the minimization pipelines

use logic_minimizer::*;
use proptest::prelude::*;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{}", i)).collect()
}

fn term_bits(max_len: usize) -> impl Strategy<Value = Vec<Option<bool>>> {
    prop::collection::vec(prop::option::of(any::<bool>()), 1..=max_len)
}

fn truth_vector() -> impl Strategy<Value = (usize, Vec<bool>)> {
    (1usize..=5).prop_flat_map(|n| (Just(n), prop::collection::vec(any::<bool>(), 1 << n)))
}

fn all_minterms(n: usize) -> impl Iterator<Item = Term> {
    (0..1usize << n).map(move |i| Term::from_index(i, n))
}

proptest! {
    #[test]
    fn encode_decode_round_trip(bits in term_bits(8)) {
        let vars = Variables::new(&names(bits.len())).unwrap();
        let term = Term::new(bits);
        let literals = term.literals(&vars);
        let encoded = encode(&literals, &vars).unwrap();
        prop_assert_eq!(&encoded, &term.to_string());
        prop_assert_eq!(decode(&encoded, &vars).unwrap(), literals);
    }

    #[test]
    fn widening_a_position_only_adds_coverage(bits in term_bits(6), pick in any::<prop::sample::Index>()) {
        let narrow = Term::new(bits.clone());
        let position = pick.index(bits.len());
        let wide = narrow.combine(position);
        for minterm in all_minterms(bits.len()) {
            if narrow.covers(&minterm) {
                prop_assert!(wide.covers(&minterm));
            }
        }
        prop_assert!(wide.fixed_count() <= narrow.fixed_count());
    }

    #[test]
    fn combinable_is_symmetric(a in term_bits(5), b in term_bits(5)) {
        let a = Term::new(a);
        let b = Term::new(b);
        prop_assert_eq!(a.combinable(&b), b.combinable(&a));
        if let Some(position) = a.combinable(&b) {
            prop_assert_eq!(a.combine(position), b.combine(position));
        }
    }

    #[test]
    fn merged_term_covers_exactly_both_sources(a in term_bits(5), flip in any::<prop::sample::Index>()) {
        let fixed: Vec<usize> = a.iter().enumerate().filter(|(_, b)| b.is_some()).map(|(i, _)| i).collect();
        prop_assume!(!fixed.is_empty());
        let position = fixed[flip.index(fixed.len())];
        let mut b = a.clone();
        b[position] = b[position].map(|v| !v);

        let a = Term::new(a);
        let b = Term::new(b);
        prop_assert_eq!(a.combinable(&b), Some(position));
        let merged = a.combine(position);
        for minterm in all_minterms(a.len()) {
            prop_assert_eq!(merged.covers(&minterm), a.covers(&minterm) || b.covers(&minterm));
        }
    }

    #[test]
    fn every_method_is_equivalent_to_the_table((n, results) in truth_vector()) {
        let table = TruthTable::from_results(Variables::new(&names(n)).unwrap(), &results).unwrap();
        for form in [NormalForm::SumOfProducts, NormalForm::ProductOfSums] {
            for method in Method::ALL {
                let minimized = table
                    .minimize_with_config(form, &MinimizerConfig::with_method(method))
                    .unwrap();
                for row in table.rows() {
                    prop_assert_eq!(minimized.evaluate(&row.assignment), row.result);
                }
            }
        }
    }

    #[test]
    fn primes_cover_every_input_term((n, results) in truth_vector()) {
        let table = TruthTable::from_results(Variables::new(&names(n)).unwrap(), &results).unwrap();
        let minterms = table.minterms();
        let primes = prime_implicants(&minterms);
        for m in &minterms {
            prop_assert!(primes.iter().any(|p| p.covers(m)));
        }
        for p in &primes {
            for m in all_minterms(n) {
                if p.covers(&m) {
                    prop_assert!(minterms.contains(&m));
                }
            }
        }
    }

    #[test]
    fn output_is_deterministic((n, results) in truth_vector(), method in prop::sample::select(Method::ALL.to_vec())) {
        let table = TruthTable::from_results(Variables::new(&names(n)).unwrap(), &results).unwrap();
        prop_assert_eq!(
            minimize_sum_of_products(&table, method).unwrap(),
            minimize_sum_of_products(&table, method).unwrap()
        );
    }
}
