/// Sorts `keys` ascending, permuting `data` in lock-step so that
/// `data[i]` keeps belonging to `keys[i]`.
///
/// Three-way partitioning keeps runs of duplicate keys (common for
/// tightly clustered primitives) from degrading to quadratic time; any
/// co-sort with the same contract could replace this, e.g. a radix sort
/// on the 30-bit keys.
pub(crate) fn run<T>(keys: &mut [u32], data: &mut [T]) {
    assert_eq!(keys.len(), data.len());

    if keys.len() > 1 {
        sort(keys, data, 0, (keys.len() - 1) as isize);
    }
}

fn sort<T>(keys: &mut [u32], data: &mut [T], low: isize, high: isize) {
    if low >= high {
        return;
    }

    let pivot = keys[(low + (high - low) / 2) as usize];

    let mut lt = low;
    let mut gt = high;
    let mut i = low;

    while i <= gt {
        let key = keys[i as usize];

        if key < pivot {
            keys.swap(lt as usize, i as usize);
            data.swap(lt as usize, i as usize);

            lt += 1;
            i += 1;
        } else if key > pivot {
            keys.swap(i as usize, gt as usize);
            data.swap(i as usize, gt as usize);

            gt -= 1;
        } else {
            i += 1;
        }
    }

    sort(keys, data, low, lt - 1);
    sort(keys, data, gt + 1, high);
}
