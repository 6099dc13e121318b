mod ring_tests {
    use libwav16_audio::core::ring::{CyclicBuffer, CyclicDeque};
    use libwav16_audio::Wav16Error;

    #[test]
    fn test_masked_indexing_wraps() {
        let mut buf: CyclicBuffer<u32> = CyclicBuffer::with_capacity(8).unwrap();
        for v in 0..20u32 {
            buf.push(v);
        }
        // any offset and the same offset plus a multiple of the capacity
        // resolve to the same slot
        for pos in 0..8usize {
            for k in 1..4usize {
                assert_eq!(buf[pos], buf[pos + k * 8]);
            }
        }
        assert_eq!(buf.pos(), 20);
    }

    #[test]
    fn test_push_keeps_most_recent_capacity_elements() {
        let mut buf: CyclicBuffer<u32> = CyclicBuffer::with_capacity(8).unwrap();
        for v in 0..12u32 {
            buf.push(v);
        }
        for i in 4..12usize {
            assert_eq!(buf[i], i as u32);
        }
    }

    #[test]
    fn test_push_n_spans_the_wrap_point() {
        let mut buf: CyclicBuffer<u8> = CyclicBuffer::with_capacity(8).unwrap();
        for v in 0..5u8 {
            buf.push(v);
        }
        buf.push_n(&[10, 11, 12, 13, 14, 15]);
        assert_eq!(buf.pos(), 11);
        for (i, expect) in (5..11).zip([10, 11, 12, 13, 14, 15]) {
            assert_eq!(buf[i], expect);
        }
    }

    #[test]
    fn test_prev_next_wrap_with_mask() {
        let buf: CyclicBuffer<u8> = CyclicBuffer::with_capacity(16).unwrap();
        assert_eq!(buf.prev(0, 1), 15);
        assert_eq!(buf.prev(3, 5), 14);
        assert_eq!(buf.next(15, 1), 0);
        assert_eq!(buf.next(10, 22), 0);
    }

    #[test]
    fn test_copy_start_to_end_mirrors_into_padding() {
        let mut buf: CyclicBuffer<u8> = CyclicBuffer::with_capacity(8).unwrap();
        for v in 1..=8u8 {
            buf.push(v);
        }
        buf.copy_start_to_end(3);
        // unmasked reads past the end see the mirrored head
        assert_eq!(buf.raw(8), 1);
        assert_eq!(buf.raw(9), 2);
        assert_eq!(buf.raw(10), 3);
    }

    #[test]
    fn test_fill_overwrites_everything() {
        let mut buf: CyclicBuffer<u16> = CyclicBuffer::with_capacity(4).unwrap();
        buf.push_n(&[1, 2, 3, 4]);
        buf.fill(7);
        for i in 0..4 {
            assert_eq!(buf[i], 7);
        }
        assert_eq!(buf.raw(4), 7);
    }

    #[test]
    fn test_release_poisons_capacity() {
        let mut buf: CyclicBuffer<u8> = CyclicBuffer::with_capacity(8).unwrap();
        buf.push(1);
        buf.release();
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.mask(), usize::MAX);
    }

    #[test]
    fn test_restart_rewinds_position_only() {
        let mut buf: CyclicBuffer<u8> = CyclicBuffer::with_capacity(4).unwrap();
        buf.push_n(&[5, 6, 7]);
        buf.restart();
        assert_eq!(buf.pos(), 0);
        assert_eq!(buf[1], 6);
    }

    #[test]
    fn test_non_power_of_two_capacity_is_rejected() {
        let err = CyclicBuffer::<u8>::with_capacity(12).unwrap_err();
        assert!(matches!(err, Wav16Error::BadConfiguration(12)));
        let err = CyclicDeque::<u8>::with_capacity(0).unwrap_err();
        assert!(matches!(err, Wav16Error::BadConfiguration(0)));
    }

    #[test]
    fn test_deque_fifo_order_across_wraps() {
        let mut dq: CyclicDeque<u32> = CyclicDeque::with_capacity(4).unwrap();
        let mut next_in = 0u32;
        let mut next_out = 0u32;
        // interleave pushes and pops so front_pos laps the capacity many times
        for round in 0..50 {
            while !dq.is_full() {
                dq.push_back(next_in);
                next_in += 1;
            }
            let pops = 1 + (round % 4);
            for _ in 0..pops {
                assert_eq!(dq.front(), next_out);
                dq.pop_front(1);
                next_out += 1;
            }
        }
        while !dq.is_empty() {
            assert_eq!(dq.front(), next_out);
            dq.pop_front(1);
            next_out += 1;
        }
        assert_eq!(next_in, next_out);
    }

    #[test]
    fn test_deque_full_and_empty_flags() {
        let mut dq: CyclicDeque<u8> = CyclicDeque::with_capacity(2).unwrap();
        assert!(dq.is_empty());
        assert!(!dq.is_full());
        dq.push_back(1);
        dq.push_back(2);
        assert!(dq.is_full());
        assert_eq!(dq.len(), 2);
        dq.pop_front(2);
        assert!(dq.is_empty());
    }

    #[test]
    fn test_deque_indexing_is_front_relative() {
        let mut dq: CyclicDeque<u8> = CyclicDeque::with_capacity(4).unwrap();
        dq.push_n(&[10, 20, 30]);
        dq.pop_front(1);
        assert_eq!(dq[0], 20);
        assert_eq!(dq[1], 30);
        dq.push_back(40);
        dq.push_back(50);
        assert_eq!(dq[2], 40);
        assert_eq!(dq[3], 50);
    }

    #[test]
    fn test_deque_push_n_accounts_size() {
        let mut dq: CyclicDeque<u8> = CyclicDeque::with_capacity(8).unwrap();
        dq.push_n(&[1, 2, 3, 4, 5]);
        assert_eq!(dq.len(), 5);
        dq.pop_front(3);
        dq.push_n(&[6, 7, 8, 9]);
        assert_eq!(dq.len(), 6);
        let drained: Vec<u8> = (0..dq.len()).map(|i| dq[i]).collect();
        assert_eq!(drained, vec![4, 5, 6, 7, 8, 9]);
    }
}
