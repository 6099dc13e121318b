use rewav16::{pack_bytes, parse_header, unpack_bytes, HEADER_LEN, MAGIC};

fn sample_pcm(frames: usize) -> Vec<u8> {
    let left: Vec<i16> = (0..frames).map(|n| ((n * 37) % 4001) as i16 - 2000).collect();
    let right: Vec<i16> = (0..frames).map(|n| ((n * 11) % 977) as i16 - 488).collect();
    rewav16::pcm::interleave(&left, &right)
}

#[test]
fn test_pack_unpack_round_trip() {
    let data = sample_pcm(3000);
    let packed = pack_bytes(&data, 0).unwrap();
    assert_eq!(unpack_bytes(&packed).unwrap(), data);
}

#[test]
fn test_header_layout() {
    let data = sample_pcm(100);
    let packed = pack_bytes(&data, 0).unwrap();
    assert_eq!(&packed[..4], &MAGIC);
    let info = parse_header(&packed).unwrap();
    assert_eq!(info.payload_len, data.len() as u64);
    assert_eq!(info.packed_len, packed.len());
    assert!(packed.len() > HEADER_LEN);
}

#[test]
fn test_empty_payload() {
    let packed = pack_bytes(&[], 0).unwrap();
    assert_eq!(unpack_bytes(&packed).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_opt_var_leaves_stream_unchanged() {
    let data = sample_pcm(500);
    assert_eq!(pack_bytes(&data, 0).unwrap(), pack_bytes(&data, 12345).unwrap());
}

#[test]
fn test_bad_magic_is_rejected() {
    let data = sample_pcm(10);
    let mut packed = pack_bytes(&data, 0).unwrap();
    packed[0] = b'X';
    assert!(unpack_bytes(&packed).is_err());
}

#[test]
fn test_short_file_is_rejected() {
    assert!(parse_header(&MAGIC).is_err());
    assert!(parse_header(&[]).is_err());
}

#[test]
fn test_non_frame_aligned_payload() {
    let mut data = sample_pcm(64);
    data.truncate(data.len() - 3);
    let packed = pack_bytes(&data, 0).unwrap();
    assert_eq!(unpack_bytes(&packed).unwrap(), data);
}
