use either::Either;
use rangeflow::testing::*;
use rangeflow::{CompositeRanger, Filter, RangerExt, Slice, Take, all};

#[test]
fn fluent_chain_reads_top_to_bottom() -> anyhow::Result<()> {
    let data = sequential_data(1, 12);
    let out = all(&data)
        .filter(|x: &i32| x % 3 == 0) // 3, 6, 9, 12
        .map(|x: &i32| x + 1) // 4, 7, 10, 13
        .take(3)
        .to_vec();
    assert_collections_equal(&out, &[4, 7, 10]);
    Ok(())
}

#[test]
fn fluent_concat_and_zip() -> anyhow::Result<()> {
    let (a, b) = ([1, 2], [3, 4]);
    let out = all(&a).concat(all(&b)).to_vec();
    assert_collections_equal(&out, &[&1, &2, &3, &4]);

    let out = all(&a).zip(all(&b)).to_vec();
    assert_collections_equal(&out, &[(&1, &3), (&2, &4)]);
    Ok(())
}

#[test]
fn fluent_flatten_variants() -> anyhow::Result<()> {
    let nested = vec![vec![1, 2], vec![3]];
    assert_eq!(all(&nested).flatten_all().accumulate(0), 6);

    let (a, b) = ([1, 2], [3]);
    let parts = vec![all(&a), all(&b)];
    assert_eq!(all(&parts).flatten().accumulate(0), 6);
    Ok(())
}

struct OddOnly;

impl<'a> CompositeRanger<Slice<'a, i32>> for OddOnly {
    type Output = Filter<fn(&'a i32) -> bool, Slice<'a, i32>>;

    fn expand(&self, input: Slice<'a, i32>) -> Self::Output {
        fn is_odd(x: &i32) -> bool {
            x % 2 == 1
        }
        input.filter(is_odd as fn(&'a i32) -> bool)
    }
}

#[test]
fn composite_stages_are_reusable() -> anyhow::Result<()> {
    let first = [1, 2, 3];
    let second = [4, 5, 6, 7];

    assert_eq!(all(&first).apply(&OddOnly).accumulate(0), 4);
    assert_eq!(all(&second).apply(&OddOnly).accumulate(0), 12);
    Ok(())
}

#[test]
fn either_selects_a_pipeline_arm_at_runtime() -> anyhow::Result<()> {
    let data = sequential_data(1, 6);

    let build = |limit: bool| -> Either<Take<Slice<'_, i32>>, Slice<'_, i32>> {
        if limit {
            Either::Left(all(&data).take(2))
        } else {
            Either::Right(all(&data))
        }
    };

    assert_eq!(build(true).accumulate(0), 3);
    assert_eq!(build(false).accumulate(0), 21);
    Ok(())
}

#[test]
fn driving_by_mutable_reference_keeps_the_pipeline() -> anyhow::Result<()> {
    let data = sequential_data(1, 6);
    let mut pipeline = all(&data).filter(|x: &i32| x % 2 == 0);

    // Two partial consumptions of the same pipeline value.
    let first_two: Vec<&i32> = (&mut pipeline).into_pull_iter().take(2).collect();
    assert_collections_equal(&first_two, &[&2, &4]);

    let rest = pipeline.to_vec();
    assert_collections_equal(&rest, &[&6]);
    Ok(())
}
