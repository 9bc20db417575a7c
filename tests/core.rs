use rangeflow::testing::*;
use rangeflow::{RangerExt, accumulate, all, filter, transform, zip2};

#[test]
fn filter_keeps_matching_elements_only() -> anyhow::Result<()> {
    let data = sequential_data(1, 10);
    let out = all(&data).filter(|x: &i32| x % 2 == 0).to_vec();

    assert_collections_equal(&out, &[&2, &4, &6, &8, &10]);
    Ok(())
}

#[test]
fn odd_sum_over_small_source() -> anyhow::Result<()> {
    let data = [1, 2, 3, 4];
    let is_odd = |x: &i32| x % 2 == 1;

    let total = accumulate(filter(is_odd, all(&data)), 0);
    assert_eq!(total, 4); // 1 + 3
    Ok(())
}

#[test]
fn filtered_sum_matches_manual_fold() -> anyhow::Result<()> {
    let inputs = vec![
        Vec::new(),
        vec![5],
        sequential_data(1, 50),
        TestDataBuilder::new()
            .add_repeated(3, 4)
            .add_range(-10..=10)
            .add_value(99)
            .build(),
    ];

    for data in inputs {
        let expected: i32 = data.iter().filter(|x| **x % 3 == 0).sum();
        let actual = accumulate(filter(|x: &i32| x % 3 == 0, all(&data)), 0);
        assert_eq!(actual, expected, "mismatch for input {data:?}");
    }
    Ok(())
}

#[test]
fn transform_is_lazy_and_applies_on_deref() -> anyhow::Result<()> {
    use std::cell::Cell;

    let calls = Cell::new(0u32);
    let data = [1, 2, 3];
    let mapped = transform(
        |x: &i32| {
            calls.set(calls.get() + 1);
            x * 10
        },
        all(&data),
    );

    // Nothing runs until the pipeline is driven.
    assert_eq!(calls.get(), 0);

    let out = mapped.to_vec();
    assert_collections_equal(&out, &[10, 20, 30]);
    assert_eq!(calls.get(), 3);
    Ok(())
}

#[test]
fn take_limits_delivery_and_reports_exhaustion_at_quota() -> anyhow::Result<()> {
    let data = sequential_data(1, 100);

    let out = all(&data).take(5).to_vec();
    assert_collections_equal(&out, &[&1, &2, &3, &4, &5]);

    // A quota larger than the source just drains it.
    let out = all(&data).take(1000).count();
    assert_eq!(out, 100);

    // A zero quota is exhausted from the start.
    let out = all(&data).take(0).count();
    assert_eq!(out, 0);
    Ok(())
}

#[test]
fn zip_and_transform_compose() -> anyhow::Result<()> {
    let index = [0, 1, 2, 3];
    let data = [1, 2, 3, 4];
    let is_odd = |x: &i32| x % 2 == 1;
    let sum_pair = |(a, b): (&i32, &i32)| a + b;

    let pipeline = transform(sum_pair, zip2(all(&index), filter(is_odd, all(&data))));
    let total = accumulate(pipeline, 0);
    assert_eq!(total, 5); // (0 + 1) + (2 + 3)
    Ok(())
}

#[test]
fn drained_output_satisfies_pipeline_predicates() -> anyhow::Result<()> {
    let data = TestDataBuilder::new()
        .add_values(vec![9, 3, 12, 7, 6])
        .add_range(1..=4)
        .build();

    let out: Vec<i32> = all(&data).filter(|x: &i32| x % 3 == 0).map(|x: &i32| *x).to_vec();

    assert_collection_size(&out, 5);
    assert_all(&out, |x| x % 3 == 0);
    assert_any(&out, |x| *x > 10);
    assert_none(&out, |x| *x < 0);
    assert_contains(&out, &12);
    Ok(())
}

#[test]
fn deep_pipelines_compose_without_loss() -> anyhow::Result<()> {
    let data = sequential_data(1, 20);
    let out = all(&data)
        .filter(|x: &i32| x % 2 == 0) // 2, 4, ..., 20
        .map(|x: &i32| x / 2) // 1, 2, ..., 10
        .filter(|x: i32| x > 3) // 4, ..., 10
        .take(3) // 4, 5, 6
        .map(|x: i32| x * 100)
        .to_vec();

    assert_collections_equal(&out, &[400, 500, 600]);
    Ok(())
}
