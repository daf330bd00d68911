use forward_list::ForwardList;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn items(lst: &ForwardList<u32>) -> Vec<u32> {
    lst.iter().copied().collect()
}

// walks a mutable cursor to `at`, stopping early at the end
fn walk(lst: &mut ForwardList<u32>, at: usize) -> forward_list::CursorMut<'_, u32> {
    let mut c = lst.before_begin_mut();
    for _ in 0..at {
        if c.peek_next().is_none() {
            break;
        }
        c.move_next();
    }
    c
}

#[test]
fn whole_list_edits_match_vec() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut lst: ForwardList<u32> = ForwardList::new();
        let mut model: Vec<u32> = vec![];

        for _ in 0..500 {
            match rng.gen_range(0..5) {
                0 => {
                    let more: Vec<u32> = (0..rng.gen_range(0..6)).map(|_| rng.gen()).collect();
                    let mut other = ForwardList::from(more.clone());
                    lst.append(&mut other);
                    assert!(other.is_empty());
                    model.extend(more);
                }
                1 => {
                    let more: Vec<u32> = (0..rng.gen_range(0..6)).map(|_| rng.gen()).collect();
                    lst.extend(more.iter());
                    model.extend(more);
                }
                2 => {
                    let take = rng.gen_range(0..=model.len());
                    let drained: Vec<u32> = lst.drain().take(take).collect();
                    let expected: Vec<u32> = model.drain(..take).collect();
                    assert_eq!(drained, expected);
                }
                3 => {
                    let at = rng.gen_range(0..=model.len());
                    let v = rng.gen();
                    walk(&mut lst, at).insert_after(v).unwrap();
                    model.insert(at, v);
                }
                _ => {
                    let at = rng.gen_range(0..=model.len());
                    let removed = walk(&mut lst, at).erase_after();
                    let expected = (at < model.len()).then(|| model.remove(at));
                    assert_eq!(removed, expected);
                }
            }
            assert_eq!(lst.len(), model.len(), "seed {seed}");
        }
        assert_eq!(items(&lst), model, "seed {seed}");
    }
}

#[test]
fn random_lists_order_like_vecs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let a: Vec<u32> = (0..rng.gen_range(0..5)).map(|_| rng.gen_range(0..3)).collect();
        let b: Vec<u32> = (0..rng.gen_range(0..5)).map(|_| rng.gen_range(0..3)).collect();
        let (la, lb) = (ForwardList::from(a.clone()), ForwardList::from(b.clone()));
        assert_eq!(la.cmp(&lb), a.cmp(&b), "{a:?} vs {b:?}");
        assert_eq!(la == lb, a == b);
    }
}
