use geo_allow::chunk::{Chunks, chunk_at};
use geo_allow::constants::CHUNK_SIZE;

fn addresses(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("10.{}.{}.0/24", i / 256, i % 256)).collect()
}

#[test]
fn chunk_at_slices_on_boundaries() {
    let list = addresses(300);
    assert_eq!(chunk_at(&list, 0, CHUNK_SIZE).len(), 256);
    assert_eq!(chunk_at(&list, 1, CHUNK_SIZE).len(), 44);
    assert!(chunk_at(&list, 2, CHUNK_SIZE).is_empty());
    assert_eq!(chunk_at(&list, 1, CHUNK_SIZE)[0], list[256]);
}

#[test]
fn chunks_reconstruct_input_in_order() {
    for len in [0usize, 1, 7, 10, 11, 30] {
        let list: Vec<usize> = (0..len).collect();
        let chunks: Vec<(usize, &[usize])> = Chunks::with_size(&list, 10).collect();

        // 連結すると元の列に戻る
        let joined: Vec<usize> = chunks.iter().flat_map(|(_, c)| c.iter().copied()).collect();
        assert_eq!(joined, list);

        // サイズCのチャンク数 = floor(len / C)
        let full = chunks.iter().filter(|(_, c)| c.len() == 10).count();
        assert_eq!(full, len / 10);

        // 番号は0から連番
        let indexes: Vec<usize> = chunks.iter().map(|(n, _)| *n).collect();
        assert_eq!(indexes, (0..chunks.len()).collect::<Vec<_>>());
    }
}

#[test]
fn empty_input_yields_no_chunks() {
    let list: Vec<String> = Vec::new();
    assert_eq!(Chunks::new(&list).count(), 0);
}

#[test]
fn default_chunk_size_is_256() {
    let list = addresses(257);
    let sizes: Vec<usize> = Chunks::new(&list).map(|(_, c)| c.len()).collect();
    assert_eq!(sizes, vec![256, 1]);

    let list = addresses(256);
    let sizes: Vec<usize> = Chunks::new(&list).map(|(_, c)| c.len()).collect();
    assert_eq!(sizes, vec![256]);
}

#[test]
fn zero_size_does_not_loop_forever() {
    let list = vec![1, 2, 3];
    assert_eq!(Chunks::with_size(&list, 0).count(), 3);
}
