//! Binary snapshot of an [`InfosetStore`].
//!
//! Rows are written big-endian after a fixed signature, one row per
//! infoset, and closed by a footer marker:
//!
//! ```text
//! u16 ROW_FIELDS
//! u8  player
//! u16 bucket length, u16 × tokens
//! u16 recall length, u16 × tokens
//! u32 key actions
//! u32 actions     (must equal key actions)
//! f64 × actions   regrets
//! f64 × actions   weights
//! ```
//!
//! Floats are stored as raw IEEE-754 bits, so a round trip is exact.
use crate::*;
use byteorder::BE;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Fields per row; doubles as the row marker.
const ROW_FIELDS: u16 = 5;

impl InfosetStore {
    /// Signature + 8 null bytes for flags and extension.
    pub fn header() -> &'static [u8] {
        b"INFOSETS\n\xFF\r\n\0\0\0\0\0\0\0\0\0"
    }
    /// Marker that ends the row stream.
    pub fn footer() -> u16 {
        0xFFFF
    }
    /// Directory used by [`InfosetStore::save`] and [`InfosetStore::load`].
    pub fn directory() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_default()
            .join("snapshots")
    }
    /// File holding the snapshot called `name` inside `dir`.
    pub fn path(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.cfr", name))
    }

    /// Save under the default directory.
    pub fn save(&self, name: &str) -> Result<PathBuf> {
        self.save_in(&Self::directory(), name)
    }
    /// Load from the default directory.
    pub fn load(name: &str) -> Result<Self> {
        Self::load_from(&Self::directory(), name)
    }
    pub fn save_in(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = Self::path(dir, name);
        log::info!("{:<32}{:<32}", "saving      infosets", path.display());
        let ref mut file = BufWriter::new(File::create(&path)?);
        self.write(file)?;
        file.flush()?;
        Ok(path)
    }
    pub fn load_from(dir: &Path, name: &str) -> Result<Self> {
        let path = Self::path(dir, name);
        log::info!("{:<32}{:<32}", "loading     infosets", path.display());
        let ref mut file = BufReader::new(File::open(&path)?);
        Self::read(file)
    }

    /// Serialize every infoset in key order.
    pub fn write<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writer.write_all(Self::header())?;
        for (key, infoset) in self.iter() {
            writer.write_u16::<BE>(ROW_FIELDS)?;
            writer.write_u8(u8::try_from(key.player()).map_err(|_| corrupt("player"))?)?;
            writer.write_u16::<BE>(u16::try_from(key.bucket().len()).map_err(|_| corrupt("bucket"))?)?;
            for token in key.bucket() {
                writer.write_u16::<BE>(*token)?;
            }
            writer.write_u16::<BE>(u16::try_from(key.recall().len()).map_err(|_| corrupt("recall"))?)?;
            for token in key.recall() {
                writer.write_u16::<BE>(*token)?;
            }
            writer.write_u32::<BE>(u32::try_from(key.choices()).map_err(|_| corrupt("key actions"))?)?;
            writer.write_u32::<BE>(u32::try_from(infoset.len()).map_err(|_| corrupt("actions"))?)?;
            for regret in infoset.regrets() {
                writer.write_f64::<BE>(*regret)?;
            }
            for weight in infoset.weights() {
                writer.write_f64::<BE>(*weight)?;
            }
        }
        writer.write_u16::<BE>(Self::footer())?;
        Ok(())
    }

    /// Deserialize a snapshot written by [`InfosetStore::write`].
    pub fn read<R>(reader: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let ref mut signature = vec![0u8; Self::header().len()];
        reader.read_exact(signature)?;
        if signature.as_slice() != Self::header() {
            return Err(corrupt("signature"));
        }
        let mut store = Self::default();
        loop {
            match reader.read_u16::<BE>()? {
                ROW_FIELDS => {
                    let (key, infoset) = row(reader)?;
                    store.restore(key, infoset)?;
                }
                0xFFFF => break,
                n => return Err(CfrError::Corrupt(format!("unexpected row marker {}", n))),
            }
        }
        log::debug!("{:<32}{:<32}", "read        infosets", store.len());
        Ok(store)
    }
}

fn row<R>(reader: &mut R) -> Result<(InfoKey, Infoset)>
where
    R: Read,
{
    let player = reader.read_u8()? as Player;
    if player >= N {
        return Err(CfrError::Corrupt(format!("player {}", player)));
    }
    let bucket = (0..reader.read_u16::<BE>()?)
        .map(|_| reader.read_u16::<BE>())
        .collect::<std::io::Result<Bucket>>()?;
    let recall = (0..reader.read_u16::<BE>()?)
        .map(|_| reader.read_u16::<BE>())
        .collect::<std::io::Result<Recall>>()?;
    let choices = reader.read_u32::<BE>()? as usize;
    let n = reader.read_u32::<BE>()? as usize;
    if choices != n {
        return Err(CfrError::Corrupt(format!(
            "key has {} actions, row has {}",
            choices, n
        )));
    }
    let regrets = (0..n)
        .map(|_| reader.read_f64::<BE>())
        .collect::<std::io::Result<Vec<_>>>()?;
    let weights = (0..n)
        .map(|_| reader.read_f64::<BE>())
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok((
        InfoKey::new(player, bucket, recall, choices),
        Infoset::from((regrets, weights)),
    ))
}

fn corrupt(field: &str) -> CfrError {
    CfrError::Corrupt(format!("{} out of range", field))
}
