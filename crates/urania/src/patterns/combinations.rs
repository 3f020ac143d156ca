/// Lexicographic k-combinations of a slice.
///
/// `[a, b, c, d]` choose 3 yields `abc, abd, acd, bcd`; element order inside
/// each combination follows the input order.
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

pub fn combinations<T: Copy>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: (0..k).collect(),
        started: false,
        done: k > items.len(),
    }
}

impl<'a, T: Copy> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.started {
            let n = self.items.len();
            let k = self.indices.len();
            let mut i = k;
            loop {
                if i == 0 {
                    self.done = true;
                    return None;
                }
                i -= 1;
                if self.indices[i] != i + n - k {
                    break;
                }
            }
            self.indices[i] += 1;
            for j in i + 1..k {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }
        self.started = true;

        Some(self.indices.iter().map(|&i| self.items[i]).collect())
    }
}
