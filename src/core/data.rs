//! The in-memory image of a [`SystemContext`], as the resumer reads it.

use super::SystemContext;
use byteorder::{ByteOrder, NativeEndian};
use error::*;
use register::REGISTERS;

/// Size of the context image: eleven 64-bit words.
pub const CONTEXT_SIZE: usize = 11 * 8;

/// Writes the context into `buf` in field order, native endian.  `buf`
/// must hold at least [`CONTEXT_SIZE`] bytes.
pub fn write_context(context: &SystemContext, buf: &mut [u8]) -> Result<()> {
    if buf.len() < CONTEXT_SIZE {
        bail!(ErrorKind::TruncatedContext(buf.len()));
    }

    context.encode(&mut buf[..CONTEXT_SIZE]);
    Ok(())
}

/// Reads a context back out of its image.
pub fn read_context(buf: &[u8]) -> Result<SystemContext> {
    if buf.len() < CONTEXT_SIZE {
        bail!(ErrorKind::TruncatedContext(buf.len()));
    }

    let mut context = SystemContext::default();
    for (index, &(register, _)) in REGISTERS.iter().enumerate() {
        context.set(register, NativeEndian::read_u64(&buf[index * 8..]));
    }

    Ok(context)
}

impl SystemContext {
    pub fn to_bytes(&self) -> [u8; CONTEXT_SIZE] {
        let mut buf = [0; CONTEXT_SIZE];
        self.encode(&mut buf);
        buf
    }

    fn encode(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), CONTEXT_SIZE);
        for (index, &(register, _)) in REGISTERS.iter().enumerate() {
            NativeEndian::write_u64(&mut buf[index * 8..], self.get(register));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_matches_repr_c_layout() {
        let context = SystemContext {
            r0: 1,
            r3: 0x1f,
            r7: 7,
            flags: 2,
            control_flags: 0x10,
            ip: 0xffff_0000_1234_5678,
            ..SystemContext::default()
        };

        let image = context.to_bytes();
        let raw: [u8; CONTEXT_SIZE] = unsafe { ::std::mem::transmute(context) };
        assert_eq!(&image[..], &raw[..]);
        assert_eq!(NativeEndian::read_u64(&image[80..]), 0xffff_0000_1234_5678);
    }

    #[test]
    fn read_reverses_write() {
        let context = SystemContext {
            r2: 0xaa,
            ip: 0x1000,
            ..SystemContext::default()
        };
        assert_eq!(read_context(&context.to_bytes()).unwrap(), context);
    }

    #[test]
    fn short_image_is_rejected() {
        let err = read_context(&[0; 16]).unwrap_err();
        match *err.kind() {
            ErrorKind::TruncatedContext(16) => {}
            ref other => panic!("unexpected error {:?}", other),
        }

        let mut buf = [0; 8];
        assert!(write_context(&SystemContext::default(), &mut buf).is_err());
        assert_eq!(buf, [0; 8]);
    }

    #[test]
    fn write_into_larger_buffer_leaves_tail() {
        let context = SystemContext {
            ip: 0x10,
            ..SystemContext::default()
        };
        let mut buf = [0xee; CONTEXT_SIZE + 4];
        write_context(&context, &mut buf).unwrap();

        assert_eq!(&buf[..CONTEXT_SIZE], &context.to_bytes()[..]);
        assert_eq!(&buf[CONTEXT_SIZE..], &[0xee; 4]);
    }
}
