//! Wire encode/decode for the replicated values.
//!
//! The authority owns four replicated values: the behavior state id, the
//! selected skill index, the skill busy flag, and the assigned target id.
//! Each publish is one tagged message; scalars are little-endian. Encoders
//! never fail; decoders report malformed input via `anyhow`.

/// Types implementing wire encoding write themselves into a byte buffer.
pub trait WireEncode {
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types implementing wire decoding reconstruct themselves from a byte slice.
pub trait WireDecode: Sized {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self>;
}

const TAG_STATE: u8 = 0x01;
const TAG_SKILL_INDEX: u8 = 0x02;
const TAG_SKILL_ACTIVE: u8 = 0x03;
const TAG_TARGET: u8 = 0x04;

/// A single replicated-value change published by the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepMsg {
    /// Which behavior state is active (registry key).
    State { id: u8 },
    /// Which skill descriptor the current cast uses.
    SkillIndex { index: u8 },
    /// Whether a skill execution is in flight (busy flag).
    SkillActive { active: bool },
    /// The assigned opposing player's id.
    Target { player: u32 },
}

impl WireEncode for RepMsg {
    fn encode(&self, out: &mut Vec<u8>) {
        match *self {
            RepMsg::State { id } => {
                out.push(TAG_STATE);
                out.push(id);
            }
            RepMsg::SkillIndex { index } => {
                out.push(TAG_SKILL_INDEX);
                out.push(index);
            }
            RepMsg::SkillActive { active } => {
                out.push(TAG_SKILL_ACTIVE);
                out.push(u8::from(active));
            }
            RepMsg::Target { player } => {
                out.push(TAG_TARGET);
                out.extend_from_slice(&player.to_le_bytes());
            }
        }
    }
}

impl WireDecode for RepMsg {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self> {
        use anyhow::bail;
        fn take<const N: usize>(inp: &mut &[u8]) -> anyhow::Result<[u8; N]> {
            if inp.len() < N {
                anyhow::bail!("short read");
            }
            let (a, b) = inp.split_at(N);
            *inp = b;
            let mut buf = [0u8; N];
            buf.copy_from_slice(a);
            Ok(buf)
        }
        let [tag] = take::<1>(inp)?;
        Ok(match tag {
            TAG_STATE => {
                let [id] = take::<1>(inp)?;
                Self::State { id }
            }
            TAG_SKILL_INDEX => {
                let [index] = take::<1>(inp)?;
                Self::SkillIndex { index }
            }
            TAG_SKILL_ACTIVE => {
                let [b] = take::<1>(inp)?;
                if b > 1 {
                    bail!("bad bool byte: {b}");
                }
                Self::SkillActive { active: b == 1 }
            }
            TAG_TARGET => {
                let player = u32::from_le_bytes(take::<4>(inp)?);
                Self::Target { player }
            }
            other => bail!("unknown rep tag: {other:#04x}"),
        })
    }
}

impl RepMsg {
    /// Convenience: encode into a fresh buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(5);
        self.encode(&mut out);
        out
    }

    /// Encode wrapped in a transport frame (what the hub publishes).
    #[must_use]
    pub fn to_frame(&self) -> Vec<u8> {
        let payload = self.to_bytes();
        let mut out = Vec::with_capacity(payload.len() + 5);
        crate::frame::write_msg(&mut out, &payload);
        out
    }

    /// Decode one framed message, rejecting trailing garbage.
    pub fn from_frame(bytes: &[u8]) -> anyhow::Result<Self> {
        let mut payload = crate::frame::read_msg(bytes)?;
        let msg = Self::decode(&mut payload)?;
        if !payload.is_empty() {
            anyhow::bail!("trailing bytes after rep msg");
        }
        Ok(msg)
    }
}
