use avl::map::{self, Map};
use compare::Compare;
use quickcheck::{Arbitrary, Gen};

pub trait OccupiedEntry<K, C> where C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>>;
}

#[derive(Clone, Debug)]
pub struct RemoveEntry<R>(R);

impl<R> Arbitrary for RemoveEntry<R> where R: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { RemoveEntry(R::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(RemoveEntry)) }
}

impl<R, K, C> Remove<K, C> for RemoveEntry<R> where R: OccupiedEntry<K, C>, C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> {
        self.0.entry(map).map(map::OccupiedEntry::remove)
    }
}

macro_rules! occupied_entry {
    ($K:ty, $V:ty, $R:ty) => {
        mod occupied_entry {
            remove!{$K, $V, crate::RemoveEntry<$R>}
        }
    }
}

pub trait Remove<K, C> where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)>;
}

macro_rules! remove {
    ($K:ty, $V:ty, $R:ty) => {
        mod remove {
            use crate::Remove;
            use avl::Map;
            use quickcheck::{TestResult, quickcheck};

            #[test]
            fn removes_key() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> TestResult {
                    match removal.remove(&mut map) {
                        None => TestResult::discard(),
                        Some((ref key, _)) => TestResult::from_bool(
                            !map.contains_key(key) &&
                            map.get(key).is_none() &&
                            map.get_mut(key).is_none() &&
                            map.iter().find(|e| e.0 == key).is_none()
                        ),
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> TestResult);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_map = map.clone();

                    match removal.remove(&mut map) {
                        None => map == old_map,
                        Some((ref key, _)) =>
                            map.iter().collect::<Vec<_>>() ==
                               old_map.iter().filter(|e| e.0 != key).collect::<Vec<_>>()
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    let old_len = map.len();

                    match removal.remove(&mut map) {
                        None => map.len() == old_len,
                        Some(_) => map.len() == old_len - 1,
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }

            #[test]
            fn stays_balanced() {
                fn test(mut map: Map<$K, $V>, removal: $R) -> bool {
                    removal.remove(&mut map);
                    (map.height() as f64) <= 1.44 * ((map.len() + 2) as f64).log2()
                }

                quickcheck(test as fn(Map<$K, $V>, $R) -> bool);
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Find<Q>(Q);

impl<Q> Arbitrary for Find<Q> where Q: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { Find(Q::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(Find)) }
}

impl<Q, K, C> Remove<K, C> for Find<Q> where C: Compare<K> + Compare<Q, K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.remove(&self.0) }
}

impl<K, C> OccupiedEntry<K, C> for Find<K> where K: Clone, C: Compare<K> {
    fn entry<'a, V>(&self, map: &'a mut Map<K, V, C>) -> Option<map::OccupiedEntry<'a, K, V>> {
        match map.entry(self.0.clone()) {
            map::Entry::Occupied(e) => Some(e),
            map::Entry::Vacant(_) => None,
        }
    }
}

pub trait Insert<K> {
    fn key(&self) -> K;
    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> Option<V> where C: Compare<K>;
}

impl<K> Insert<K> for Find<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> Option<V> where C: Compare<K> {
        map.insert(self.0, value)
    }
}

#[derive(Clone, Debug)]
pub struct FindEntry<K>(K);

impl<K> Arbitrary for FindEntry<K> where K: Arbitrary {
    fn arbitrary(gen: &mut Gen) -> Self { FindEntry(K::arbitrary(gen)) }
    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> { Box::new(self.0.shrink().map(FindEntry)) }
}

impl<K> Insert<K> for FindEntry<K> where K: Clone {
    fn key(&self) -> K { self.0.clone() }

    fn insert<V, C>(self, map: &mut Map<K, V, C>, value: V) -> Option<V> where C: Compare<K> {
        use avl::map::Entry;

        match map.entry(self.0) {
            Entry::Occupied(mut e) => Some(e.insert(value)),
            Entry::Vacant(e) => { e.insert(value); None }
        }
    }
}

macro_rules! insert {
    ($K:ty, $V:ty, $R:ty) => {
        mod insert {
            use crate::Insert;
            use avl::Map;
            use quickcheck::quickcheck;

            #[test]
            fn sets_len() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_len = map.len();

                    if r.insert(&mut map, value).is_some() {
                        map.len() == old_len
                    } else {
                        map.len() == old_len + 1
                    }
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn inserts_key() {
                fn test(mut map: Map<$K, $V>, r: $R, mut value: $V) -> bool {
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.contains_key(&key) &&
                    map.get(&key) == Some(&value) &&
                    map.get_mut(&key) == Some(&mut value) &&
                    map.iter().filter(|e| *e.0 == key).collect::<Vec<_>>() == [(&key, &value)]
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn affects_no_others() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_map = map.clone();
                    let key = r.key();
                    r.insert(&mut map, value);

                    map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                        old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn returns_old_value() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let key = r.key();
                    map.get(&key).cloned() == r.insert(&mut map, value)
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }

            #[test]
            fn keeps_height_when_present() {
                fn test(mut map: Map<$K, $V>, r: $R, value: $V) -> bool {
                    let old_height = map.height();
                    let present = map.contains_key(&r.key());
                    r.insert(&mut map, value);
                    !present || map.height() == old_height
                }

                quickcheck(test as fn(Map<$K, $V>, $R, $V) -> bool);
            }
        }
    }
}

mod find {
    mod entry {
        use avl::map::{Entry, Map};
        use quickcheck::quickcheck;

        #[test]
        fn agrees_with_get() {
            fn test(mut map: Map<u32, u16>, key: u32) -> bool {
                let value = map.get(&key).cloned();

                match map.entry(key) {
                    Entry::Occupied(e) => value == Some(*e.get()),
                    Entry::Vacant(_) => value.is_none(),
                }
            }

            quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
        }

        insert!{u32, u16, crate::FindEntry<u32>}
    }

    insert!{u32, u16, crate::Find<u32>}
    occupied_entry!{u32, u16, crate::Find<u32>}
    remove!{u32, u16, crate::Find<u32>}
}

#[derive(Clone, Debug)]
struct Max;

impl Arbitrary for Max { fn arbitrary(_gen: &mut Gen) -> Self { Max } }

impl<K, C> Remove<K, C> for Max where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.delete_max().ok() }
}

mod max {
    use avl::{EmptyTreeError, Map};
    use quickcheck::quickcheck;

    #[test]
    fn agrees_with_iter() {
        fn test(map: Map<u32, u16>) -> bool {
            map.max() == map.iter().rev().next()
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    #[test]
    fn delete_fails_when_empty() {
        fn test(mut map: Map<u32, u16>) -> bool {
            match map.delete_max() {
                Ok(_) => true,
                Err(EmptyTreeError) => map.is_empty(),
            }
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::Max}
}

#[derive(Clone, Debug)]
struct Min;

impl Arbitrary for Min { fn arbitrary(_gen: &mut Gen) -> Self { Min } }

impl<K, C> Remove<K, C> for Min where C: Compare<K> {
    fn remove<V>(&self, map: &mut Map<K, V, C>) -> Option<(K, V)> { map.delete_min().ok() }
}

mod min {
    use avl::{EmptyTreeError, Map};
    use quickcheck::quickcheck;

    #[test]
    fn agrees_with_iter() {
        fn test(map: Map<u32, u16>) -> bool {
            map.min() == map.iter().next()
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    #[test]
    fn delete_fails_when_empty() {
        fn test(mut map: Map<u32, u16>) -> bool {
            match map.delete_min() {
                Ok(_) => true,
                Err(EmptyTreeError) => map.is_empty(),
            }
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    remove!{u32, u16, crate::Min}
}

mod succ {
    use avl::Map;
    use quickcheck::quickcheck;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.succ(&key, false) == map.iter().find(|e| *e.0 > key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.succ(&key, true) == map.iter().find(|e| *e.0 >= key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }
}

mod pred {
    use avl::Map;
    use quickcheck::quickcheck;

    #[test]
    fn exclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.pred(&key, false) == map.iter().rev().find(|e| *e.0 < key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }

    #[test]
    fn inclusive_agrees_with_iter() {
        fn test(map: Map<u32, u16>, key: u32) -> bool {
            map.pred(&key, true) == map.iter().rev().find(|e| *e.0 <= key)
        }

        quickcheck(test as fn(Map<u32, u16>, u32) -> bool);
    }
}

mod iter {
    use avl::Map;
    use quickcheck::quickcheck;

    #[test]
    fn ascends() {
        fn test(map: Map<u32, u16>) -> bool {
            map.iter().zip(map.iter().skip(1)).all(|(e1, e2)| e1.0 < e2.0)
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    #[test]
    fn descends_when_reversed() {
        fn test(map: Map<u32, u16>) -> bool {
            map.iter().rev().zip(map.iter().rev().skip(1)).all(|(e2, e1)| e2.0 > e1.0)
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    #[test]
    fn size_hint_is_exact() {
        fn test(map: Map<u32, u16>) -> bool {
            let mut len = map.len();
            let mut it = map.iter();

            loop {
                if it.size_hint() != (len, Some(len)) { return false; }
                if it.next().is_none() { break; }
                len -= 1;
            }

            len == 0 && it.size_hint() == (0, Some(0))
        }

        quickcheck(test as fn(Map<u32, u16>) -> bool);
    }

    #[quickcheck_macros::quickcheck]
    fn meets_in_the_middle(map: Map<u32, u16>, fronts: Vec<bool>) -> bool {
        let mut it = map.iter();
        let mut seen = vec![];

        for front in fronts.into_iter().chain(std::iter::repeat(true)).take(map.len() + 1) {
            let next = if front { it.next() } else { it.next_back() };
            if let Some(e) = next { seen.push(e); }
        }

        seen.sort();
        seen == map.iter().collect::<Vec<_>>()
    }

    #[quickcheck_macros::quickcheck]
    fn iter_mut_agrees_with_iter(mut map: Map<u32, u16>) -> bool {
        let expected: Vec<_> = map.iter().map(|(k, v)| (*k, v.wrapping_add(1))).collect();
        for (_, v) in map.iter_mut() { *v = v.wrapping_add(1); }
        map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>() == expected
    }

    #[quickcheck_macros::quickcheck]
    fn into_iter_agrees_with_iter(map: Map<u32, u16>) -> bool {
        let expected: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let reversed: Vec<_> = map.clone().into_iter().rev().collect();
        map.into_iter().collect::<Vec<_>>() == expected &&
            reversed.into_iter().rev().collect::<Vec<_>>() == expected
    }
}
