use rangeflow::testing::*;
use rangeflow::{RangerExt, all, filter, zip2};

#[test]
fn pull_iterator_yields_every_element() -> anyhow::Result<()> {
    let data = sequential_data(1, 5);
    let collected: Vec<&i32> = all(&data).into_pull_iter().collect();
    assert_collections_equal(&collected, &[&1, &2, &3, &4, &5]);
    Ok(())
}

#[test]
fn for_loop_over_zipped_pipeline() -> anyhow::Result<()> {
    let index = [0, 1, 2, 3];
    let data = [1, 2, 3, 4];
    let pipeline = zip2(all(&index), filter(|x: &i32| x % 2 == 1, all(&data)));

    let mut total = 0;
    for (i, e) in pipeline.into_pull_iter() {
        total += i + e;
    }
    assert_eq!(total, 5); // (0 + 1) + (1 + 3)
    Ok(())
}

#[test]
fn exhausted_iterator_stays_empty() -> anyhow::Result<()> {
    let data = [1, 2];
    let mut iter = all(&data).into_pull_iter();

    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert!(iter.is_done());
    assert_eq!(iter.next(), None);
    Ok(())
}

#[test]
fn quota_reached_at_natural_end_still_yields_last_element() -> anyhow::Result<()> {
    // `take(2)` over a two-element source delivers the second element and
    // reports exhaustion in the same drive; the iterator must not drop it.
    let data = [1, 2];
    let collected: Vec<&i32> = all(&data).take(2).into_pull_iter().collect();
    assert_collections_equal(&collected, &[&1, &2]);
    Ok(())
}

#[test]
fn iterator_adapters_apply_downstream() -> anyhow::Result<()> {
    let data = sequential_data(1, 10);
    let first_squares: Vec<i32> = all(&data)
        .map(|x: &i32| x * x)
        .into_pull_iter()
        .take(3)
        .collect();
    assert_collections_equal(&first_squares, &[1, 4, 9]);
    Ok(())
}
