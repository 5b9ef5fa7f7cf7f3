use sortq::{ByKey, OrderedQueue};
use std::cell::Cell;
use std::rc::Rc;

struct Tracked {
    rank: u32,
    drops: Rc<Cell<u32>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn tracked(rank: u32, drops: &Rc<Cell<u32>>) -> Box<Tracked> {
    let drops = drops.clone();
    Box::new(Tracked { rank, drops })
}

#[allow(clippy::borrowed_box)]
fn rank(tracked: &Box<Tracked>) -> u32 {
    tracked.rank
}

#[test]
fn boxed_elements_drop_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut queue = OrderedQueue::with_comparator(ByKey::new(rank));
        for value in &[3, 1, 2] {
            queue.emplace(tracked(*value, &drops));
        }
        assert_eq!(queue.top().map(|t| t.rank), Some(1));
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 3);
}

#[test]
fn removed_elements_are_handed_back() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = OrderedQueue::with_comparator(ByKey::new(rank));
    queue.emplace_all(vec![tracked(2, &drops), tracked(1, &drops)]);

    let top = queue.pop_back().unwrap();
    assert_eq!(top.rank, 1);
    assert_eq!(drops.get(), 0);
    drop(top);
    assert_eq!(drops.get(), 1);

    let erased = queue.erase(0).unwrap();
    assert_eq!(drops.get(), 1);
    drop(erased);
    assert_eq!(drops.get(), 2);
    assert!(queue.empty());
}

#[test]
fn failed_erase_drops_nothing() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = OrderedQueue::with_comparator(ByKey::new(rank));
    queue.emplace(tracked(1, &drops));
    assert!(queue.erase(1).is_err());
    assert_eq!(drops.get(), 0);
    queue.clear();
    assert_eq!(drops.get(), 1);
}

#[test]
fn boxes_order_by_pointee() {
    let mut queue = OrderedQueue::<Box<i32>>::new();
    queue.emplace(Box::new(3));
    queue.emplace(Box::new(-1));
    assert_eq!(queue.top().map(|b| **b), Some(-1));
}
