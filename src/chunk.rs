//! アドレス一覧を固定サイズのチャンクに分割する。

use crate::constants::CHUNK_SIZE;

/// `n` 番目のチャンク `[n*size, n*size+size)` を返す。範囲外なら空スライス。
pub fn chunk_at<T>(items: &[T], n: usize, size: usize) -> &[T] {
    let start = n.saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let stop = start.saturating_add(size).min(items.len());
    &items[start..stop]
}

/// チャンクを (index, slice) で順に返すイテレータ。
/// 最初に空のチャンクが出た時点で終了する。
#[derive(Debug, Clone)]
pub struct Chunks<'a, T> {
    items: &'a [T],
    size: usize,
    index: usize,
    done: bool,
}

impl<'a, T> Chunks<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self::with_size(items, CHUNK_SIZE)
    }

    /// サイズ0は無限ループになるため1として扱う
    pub fn with_size(items: &'a [T], size: usize) -> Self {
        Self {
            items,
            size: size.max(1),
            index: 0,
            done: false,
        }
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = (usize, &'a [T]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let chunk = chunk_at(self.items, self.index, self.size);
        if chunk.is_empty() {
            self.done = true;
            return None;
        }
        let n = self.index;
        self.index += 1;
        Some((n, chunk))
    }
}
