use super::*;

#[test]
fn block_collects_cells_in_order() {
    let block: BlockSymbols = (0..5u16).map(|i| SymbolCell::new(i, (i % 4) as u8)).collect();
    assert_eq!(block.len(), 5);
    assert!(!block.is_empty());
    assert_eq!(block.symbols()[3], SymbolCell::new(3, 3));
    assert!(BlockSymbols::default().is_empty());
}

#[test]
fn streams_are_object_safe() {
    struct Empty;
    impl BlockStream for Empty {
        fn block_count(&self) -> u64 {
            0
        }
        fn blocks_required(&self) -> u64 {
            1
        }
        fn restart(&mut self) {}
        fn restart_and_resize_buffer(&mut self, chunk_size: usize) -> bool {
            chunk_size > 0
        }
        fn next_block(&mut self) -> BlockSymbols {
            BlockSymbols::default()
        }
    }

    let mut stream: Box<dyn BlockStream> = Box::new(Empty);
    assert!(stream.restart_and_resize_buffer(8));
    assert!(!stream.restart_and_resize_buffer(0));
    assert!(stream.next_block().is_empty());
}
