use classic_ds::sort::{selection_sort_by_key, sort_by_priority, PriorityRecord};

#[quickcheck]
fn sorted_permutation(priorities: Vec<i64>) -> bool {
    let mut records: Vec<_> = priorities
        .iter()
        .enumerate()
        .map(|(i, p)| PriorityRecord::new(format!("record {i}"), *p))
        .collect();
    let mut expected = records.clone();
    sort_by_priority(&mut records);

    let ascending = records.windows(2).all(|w| w[0].priority <= w[1].priority);

    // Same records, possibly shuffled among equal priorities.
    expected.sort_by(|a, b| a.name.cmp(&b.name));
    let mut actual = records;
    actual.sort_by(|a, b| a.name.cmp(&b.name));

    ascending && actual == expected
}

#[test]
fn sorts_floats_by_key() {
    let mut xs = [(2.5, 'b'), (-1.0, 'a'), (10.0, 'c')];
    selection_sort_by_key(&mut xs, |(x, _)| *x);

    assert_eq!(xs.map(|(_, c)| c), ['a', 'b', 'c']);
}
