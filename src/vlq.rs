#![doc = r#"
Variable-length quantities

Delta times are written seven bits at a time, most significant group first.
Every byte but the last has its high bit set:

```text
0x00000000 -> 00
0x0000007F -> 7F
0x00000080 -> 81 00
0x00003FFF -> FF 7F
0x00004000 -> 81 80 00
0x0FFFFFFF -> FF FF FF 7F
```
"#]

use crate::DeltaTicks;

/// The most bytes a [`DeltaTicks`] can occupy
pub const MAX_LEN: usize = 4;

/// Appends `delta` to `out` as a variable-length quantity.
pub fn write(delta: DeltaTicks, out: &mut Vec<u8>) {
    let groups = Groups::new(delta.ticks());
    out.extend_from_slice(groups.as_slice());
}

/// The number of bytes `delta` occupies once written.
pub fn len(delta: DeltaTicks) -> usize {
    Groups::new(delta.ticks()).as_slice().len()
}

/// The groups of a value, right-aligned in a fixed buffer.
struct Groups {
    buf: [u8; MAX_LEN],
    start: usize,
}

impl Groups {
    // `value` must fit in 28 bits
    fn new(mut value: u32) -> Self {
        let mut buf = [0u8; MAX_LEN];
        let mut start = MAX_LEN - 1;
        buf[start] = (value & 0x7F) as u8;
        value >>= 7;
        while value > 0 && start > 0 {
            start -= 1;
            buf[start] = 0x80 | (value & 0x7F) as u8;
            value >>= 7;
        }
        Self { buf, start }
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}
