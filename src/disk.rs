use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::Error;

/// A span of contiguous blocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Span {
    start: usize,
    len: usize,
}

/// An expanded disk: one entry per block, holding the id of the file that
/// occupies it.
#[derive(Clone, Debug)]
pub struct DiskMap {
    blocks: Vec<Option<u32>>,
    files: Vec<Span>,
    gaps: Vec<Span>,
}

impl DiskMap {
    /// Expands a dense map where digits alternate file length and free length.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let input = input.trim();
        let mut blocks = Vec::with_capacity(9 * input.len());
        let mut files = vec![];
        let mut gaps = vec![];
        for (ci, cell) in input.bytes().enumerate() {
            if !cell.is_ascii_digit() {
                return Err(Error::InvalidCell { row: 0, col: ci, cell: cell as char });
            }
            let span = Span { start: blocks.len(), len: (cell - b'0') as usize };
            if ci % 2 == 0 {
                let id = files.len() as u32;
                files.push(span);
                blocks.resize(blocks.len() + span.len, Some(id));
            } else {
                gaps.push(span);
                blocks.resize(blocks.len() + span.len, None);
            }
        }
        Ok(Self { blocks, files, gaps })
    }

    /// Moves single blocks from the end of the disk into the leftmost gap
    /// until the files are contiguous.
    pub fn compact_blocks(&mut self) {
        let mut block_iter = self.blocks.iter_mut();
        loop {
            let Some(left) = block_iter.find(|block| block.is_none()) else { break };
            let Some(right) = block_iter.rfind(|block| block.is_some()) else { break };
            *left = right.take();
        }
    }

    /// Moves whole files, highest id first, into the leftmost gap that fits
    /// them. Each file is tried once and never moves right.
    pub fn compact_files(&mut self) {
        // gaps by length, each a min-heap on start
        let mut by_len: [BinaryHeap<Reverse<usize>>; 10] = Default::default();
        for gap in self.gaps.iter().filter(|gap| gap.len > 0) {
            by_len[gap.len].push(Reverse(gap.start));
        }

        for (id, file) in self.files.iter().enumerate().rev() {
            if file.len == 0 {
                continue;
            }
            let best = (file.len..by_len.len())
                .filter_map(|len| by_len[len].peek().map(|&Reverse(start)| (start, len)))
                .min();
            let Some((start, len)) = best.filter(|&(start, _)| start < file.start) else {
                continue;
            };
            by_len[len].pop();
            if len > file.len {
                by_len[len - file.len].push(Reverse(start + file.len));
            }
            self.blocks[start..][..file.len].fill(Some(id as u32));
            self.blocks[file.start..][..file.len].fill(None);
        }
    }

    pub fn checksum(&self) -> u64 {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, block)| block.map(|id| pos as u64 * id as u64))
            .sum()
    }

    pub fn blocks(&self) -> &[Option<u32>] {
        &self.blocks
    }
}
