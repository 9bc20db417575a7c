use rangeflow::testing::*;
use rangeflow::{Cursor, Ranger, RangerExt, SliceCursor, all, join, join_all};

#[test]
fn flattens_nested_sequences() -> anyhow::Result<()> {
    let nested = vec![vec![1, 2], vec![3], vec![4, 5, 6]];
    let out = join_all(all(&nested)).to_vec();
    assert_collections_equal(&out, &[&1, &2, &3, &4, &5, &6]);
    Ok(())
}

#[test]
fn empty_sub_sequences_are_skipped() -> anyhow::Result<()> {
    let nested = nested_with_empty(); // [1, 2], [], [3, 4, 5]
    let out = join_all(all(&nested)).to_vec();
    assert_collections_equal(&out, &[&1, &2, &3, &4, &5]);
    Ok(())
}

#[test]
fn empty_outer_yields_nothing() -> anyhow::Result<()> {
    let nested: Vec<Vec<i32>> = Vec::new();
    assert_eq!(join_all(all(&nested)).count(), 0);
    Ok(())
}

#[test]
fn flattens_stored_rangers() -> anyhow::Result<()> {
    let a = [1, 2];
    let b = [3, 4];
    let parts = vec![all(&a), all(&b)];

    let out = join(all(&parts)).to_vec();
    assert_collections_equal(&out, &[&1, &2, &3, &4]);
    Ok(())
}

#[test]
fn flattens_prefiltered_rangers() -> anyhow::Result<()> {
    let a = [1, 2, 3, 4];
    let b = [5, 6, 7, 8];
    let is_even = |x: &i32| x % 2 == 0;
    let parts = vec![all(&a).filter(is_even), all(&b).filter(is_even)];

    let total = join(all(&parts)).accumulate(0);
    assert_eq!(total, 20); // 2 + 4 + 6 + 8
    Ok(())
}

#[test]
fn stop_mid_sub_sequence_resumes_inside_it() -> anyhow::Result<()> {
    let nested = vec![vec![1, 2, 3], vec![4, 5]];
    let mut ranger = join_all(all(&nested));

    let mut seen = Vec::new();
    let done = ranger.drive(&mut |p: &SliceCursor<'_, i32>| {
        seen.push(*p.get());
        // Stop in the middle of the first sub-sequence.
        seen.len() < 2
    });
    assert!(!done);
    assert_eq!(seen, vec![1, 2]);

    // The held sub-ranger resumes at 3, then the outer moves on.
    let out = ranger.to_vec();
    assert_collections_equal(&out, &[&3, &4, &5]);
    Ok(())
}

#[test]
fn single_shot_drain_covers_every_nested_element() -> anyhow::Result<()> {
    let nested = vec![vec![1], vec![2, 3], vec![], vec![4]];
    let mut ranger = join_all(all(&nested));

    let mut collected = Vec::new();
    loop {
        let mut got = None;
        let done = ranger.drive(&mut |p: &SliceCursor<'_, i32>| {
            got = Some(*p.get());
            false
        });
        collected.extend(got);
        if done {
            break;
        }
    }
    assert_collections_equal(&collected, &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn flatten_composes_with_downstream_combinators() -> anyhow::Result<()> {
    let nested = vec![vec![1, 1, 2], vec![2, 3, 3]];
    let out = join_all(all(&nested)).unique().to_vec();
    // The run of 2s spans a sub-sequence boundary and still collapses.
    assert_collections_equal(&out, &[&1, &2, &3]);
    Ok(())
}
