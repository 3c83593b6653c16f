use crate::model::vertex::Vertex;

const INITIAL_CAPACITY: usize = 32;
const MAX_LOAD_FACTOR: f64 = 0.7;

#[derive(Clone)]
struct Slot {
    vertex: Vertex,
    hash: u64,
    /// probe sequence length: how many slots past its ideal bucket this
    /// entry currently sits.
    psl: usize,
}

/// an open-addressed hash set of visited vertices, used by the planner to
/// test whether a popped vertex has already been finalized.
///
/// uses Robin Hood hashing: on insert, an entry that has probed further
/// than the one occupying its slot displaces it, so no entry's probe
/// distance grows unbounded and lookups terminate as soon as a slot with a
/// shorter probe distance than the target is seen.
pub struct ClosedSet {
    slots: Vec<Option<Slot>>,
    mask: usize,
    size: usize,
}

impl ClosedSet {
    pub fn new() -> Self {
        ClosedSet {
            slots: vec![None; INITIAL_CAPACITY],
            mask: INITIAL_CAPACITY - 1,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// hash zero is reserved as the empty-slot sentinel; a vertex whose
    /// structural or identity hash happens to be zero is stored under `1`
    /// instead.
    fn stored_hash(vertex: &Vertex) -> u64 {
        let h = vertex.hash_value();
        if h == 0 {
            1
        } else {
            h
        }
    }

    /// inserts `vertex`, returning `true` if it was not already present.
    pub fn add(&mut self, vertex: &Vertex) -> bool {
        let load_factor = (self.size + 1) as f64 / self.slots.len() as f64;
        if load_factor > MAX_LOAD_FACTOR {
            self.resize();
        }
        let hash = Self::stored_hash(vertex);
        let inserted = Self::insert_entry(&mut self.slots, self.mask, hash, vertex.clone());
        if inserted {
            self.size += 1;
        }
        inserted
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        let hash = Self::stored_hash(vertex);
        let mut idx = (hash as usize) & self.mask;
        let mut psl = 0usize;
        loop {
            match &self.slots[idx] {
                None => return false,
                Some(slot) => {
                    if slot.hash == hash && &slot.vertex == vertex {
                        return true;
                    }
                    if slot.psl < psl {
                        return false;
                    }
                }
            }
            idx = (idx + 1) & self.mask;
            psl += 1;
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.size = 0;
    }

    fn insert_entry(slots: &mut [Option<Slot>], mask: usize, mut hash: u64, mut vertex: Vertex) -> bool {
        let mut idx = (hash as usize) & mask;
        let mut psl = 0usize;
        loop {
            match &mut slots[idx] {
                None => {
                    slots[idx] = Some(Slot { vertex, hash, psl });
                    return true;
                }
                Some(slot) => {
                    if slot.hash == hash && slot.vertex == vertex {
                        return false;
                    }
                    if slot.psl < psl {
                        std::mem::swap(&mut vertex, &mut slot.vertex);
                        std::mem::swap(&mut hash, &mut slot.hash);
                        std::mem::swap(&mut psl, &mut slot.psl);
                    }
                }
            }
            idx = (idx + 1) & mask;
            psl += 1;
        }
    }

    fn resize(&mut self) {
        let new_capacity = self.slots.len() * 2;
        let new_mask = new_capacity - 1;
        let mut new_slots: Vec<Option<Slot>> = vec![None; new_capacity];

        for slot in self.slots.drain(..).flatten() {
            Self::insert_entry(&mut new_slots, new_mask, slot.hash, slot.vertex);
        }

        self.slots = new_slots;
        self.mask = new_mask;
    }
}

impl Default for ClosedSet {
    fn default() -> Self {
        ClosedSet::new()
    }
}
