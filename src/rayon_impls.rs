use crate::HashMap;
use rayon::iter::{IntoParallelIterator, ParallelExtend, ParallelIterator};

impl ParallelExtend<(i32, i32)> for HashMap {
    // This is of limited use due to the `&mut self` parameter. See `par_extend_sync`
    fn par_extend<I>(&mut self, par_iter: I)
    where
        I: IntoParallelIterator<Item = (i32, i32)>,
    {
        self.par_extend_sync(par_iter);
    }
}

impl HashMap {
    /// Inserts every pair of `par_iter` from the `rayon` thread pool.
    ///
    /// Like [`ParallelExtend::par_extend`], but through a shared reference, so other threads can
    /// keep using the map while it is being filled.
    pub fn par_extend_sync<I>(&self, par_iter: I)
    where
        I: IntoParallelIterator<Item = (i32, i32)>,
    {
        par_iter.into_par_iter().for_each(|(k, v)| {
            self.insert(k, v);
        });
    }
}
