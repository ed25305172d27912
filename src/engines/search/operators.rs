use super::candidate::Candidate;
use rand::Rng;

/// Whole-field recombination: the child inherits each field wholesale from
/// one parent, chosen uniformly and independently per field. There is no
/// per-gene crossover; an order travels with neither its segments nor its
/// target length.
pub fn recombine<R: Rng>(parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Candidate {
    let target_minutes = if rng.gen::<bool>() {
        parent1.target_minutes
    } else {
        parent2.target_minutes
    };
    let segments = if rng.gen::<bool>() {
        parent1.segments.clone()
    } else {
        parent2.segments.clone()
    };
    let order = if rng.gen::<bool>() {
        parent1.order.clone()
    } else {
        parent2.order.clone()
    };

    Candidate {
        target_minutes,
        segments,
        order,
        fitness: None,
    }
}

/// Pick two distinct parents from the retained elite at random.
///
/// Distinct within a pair; successive calls draw with replacement.
pub fn pick_parents<'a, R: Rng>(
    elite: &'a [Candidate],
    rng: &mut R,
) -> (&'a Candidate, &'a Candidate) {
    if elite.len() < 2 {
        return (&elite[0], &elite[0]);
    }
    let first = rng.gen_range(0..elite.len());
    let second = (first + 1 + rng.gen_range(0..elite.len() - 1)) % elite.len();
    (&elite[first], &elite[second])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn candidate(target: f64, tag: &str) -> Candidate {
        Candidate {
            target_minutes: target,
            segments: vec![PathBuf::from(format!("{}_a.wav", tag))],
            order: vec![0],
            fitness: Some(target),
        }
    }

    #[test]
    fn test_recombine_copies_whole_fields() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = candidate(3.6, "p1");
        let p2 = candidate(4.4, "p2");

        for _ in 0..50 {
            let child = recombine(&p1, &p2, &mut rng);
            assert!(
                child.target_minutes == p1.target_minutes
                    || child.target_minutes == p2.target_minutes
            );
            assert!(child.segments == p1.segments || child.segments == p2.segments);
            assert!(child.order == p1.order || child.order == p2.order);
            assert!(child.fitness.is_none());
        }
    }

    #[test]
    fn test_pick_parents_distinct_within_pair() {
        let mut rng = StdRng::seed_from_u64(11);
        let elite = vec![candidate(3.6, "a"), candidate(4.0, "b"), candidate(4.4, "c")];

        for _ in 0..50 {
            let (p1, p2) = pick_parents(&elite, &mut rng);
            assert!(p1.target_minutes != p2.target_minutes);
        }
    }
}
